//! EAP-SIM / EAP-AKA attributes
//!
//! - [`types`]: attribute type codes
//! - [`value`]: attribute values and the method-aware attribute factory
//! - [`map`]: the ordered, duplicate-free attribute container

pub mod map;
pub mod types;
pub mod value;

pub use map::Attributes;
pub use types::{is_skippable, AttributeType, SKIPPABLE_ATTRIBUTE_RANGE_START};
pub use value::{
    Attribute, AUTN_LEN, AUTS_LEN, BIDDING_SUPPORTS_AKA_PRIME, CHECKCODE_LENGTHS, IV_LEN,
    LENGTH_SCALING, MAC_LEN, MAX_ATTRIBUTE_LENGTH, MAX_RES_LEN, MIN_RES_LEN, NONCE_LEN,
    NOTIFICATION_PRE_CHALLENGE_BIT, NOTIFICATION_SUCCESS_BIT, RAND_LEN,
};
