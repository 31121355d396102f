//! EAP-SIM / EAP-AKA / EAP-AKA' type-data codec
//!
//! Encodes and decodes the Type-Data of EAP-SIM (RFC 4186), EAP-AKA
//! (RFC 4187) and EAP-AKA' (RFC 5448) packets.
//!
//! # Overview
//!
//! Type data is a one byte subtype, two reserved bytes and a stream of
//! attributes. Each attribute is a type byte, a length byte counting 4-byte
//! units and a zero padded value. The three methods share the envelope and
//! differ only in their subtype tables, the attributes they understand and
//! how many RANDs AT_RAND may carry; see [`EapMethod`].
//!
//! Decoding received data never panics and never returns a rich error:
//! failures are logged through `tracing` and reported as the
//! [`ClientErrorCode`] the peer should be answered with.
//!
//! - [`attribute`]: attribute types, values and the ordered container
//! - [`type_data`]: the [`TypeData`] envelope
//! - [`message`]: EAP packet framing around the type data
//! - [`method`]: per-method descriptor tables
//!
//! # Example
//!
//! ```rust
//! use simaka_eap::{ClientErrorCode, EapMethod, TypeData};
//!
//! // SIM-Challenge with a single RAND
//! let mut bytes = vec![11, 0, 0, 1, 5, 0, 0];
//! bytes.extend_from_slice(&[0x42; 16]);
//!
//! assert_eq!(
//!     TypeData::decode(EapMethod::Sim, &bytes),
//!     Err(ClientErrorCode::InsufficientChallenges)
//! );
//!
//! // One RAND is what an AKA-Challenge carries
//! bytes[0] = 1;
//! assert!(TypeData::decode(EapMethod::Aka, &bytes).is_ok());
//! ```

pub mod attribute;
pub mod error;
pub mod message;
pub mod method;
pub mod type_data;

pub use attribute::{Attribute, AttributeType, Attributes};
pub use error::{ClientErrorCode, DecodeError, TypeDataError};
pub use message::{EapCode, EapData, EapError, EapMessage, EapType, MAX_EAP_PACKET_LEN};
pub use method::{EapMethod, MethodDescriptor};
pub use type_data::{DecodeResult, TypeData, MAX_TYPE_DATA_LEN, TYPE_DATA_HEADER_LEN};
