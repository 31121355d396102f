//! Attribute type codes (RFC 4186 Section 11, RFC 4187 Section 11, RFC 5448)

use std::fmt;

use crate::error::DecodeError;

/// First attribute type a receiver may skip when it does not implement it
pub const SKIPPABLE_ATTRIBUTE_RANGE_START: u8 = 128;

/// Known EAP-SIM / EAP-AKA / EAP-AKA' attribute types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum AttributeType {
    /// AT_RAND (1) - Random challenge(s)
    AtRand = 1,
    /// AT_AUTN (2) - Authentication token
    AtAutn = 2,
    /// AT_RES (3) - Authentication response
    AtRes = 3,
    /// AT_AUTS (4) - Resynchronization parameter
    AtAuts = 4,
    /// AT_PADDING (6) - Padding
    AtPadding = 6,
    /// AT_NONCE_MT (7) - Nonce from the peer
    AtNonceMt = 7,
    /// AT_PERMANENT_ID_REQ (10) - Permanent identity request
    AtPermanentIdReq = 10,
    /// AT_MAC (11) - Message authentication code
    AtMac = 11,
    /// AT_NOTIFICATION (12) - Notification code
    AtNotification = 12,
    /// AT_ANY_ID_REQ (13) - Any identity request
    AtAnyIdReq = 13,
    /// AT_IDENTITY (14) - Identity
    AtIdentity = 14,
    /// AT_VERSION_LIST (15) - Supported versions
    AtVersionList = 15,
    /// AT_SELECTED_VERSION (16) - Selected version
    AtSelectedVersion = 16,
    /// AT_FULLAUTH_ID_REQ (17) - Full authentication identity request
    AtFullauthIdReq = 17,
    /// AT_COUNTER (19) - Re-authentication counter
    AtCounter = 19,
    /// AT_COUNTER_TOO_SMALL (20) - Counter too small
    AtCounterTooSmall = 20,
    /// AT_NONCE_S (21) - Nonce from the server
    AtNonceS = 21,
    /// AT_CLIENT_ERROR_CODE (22) - Client error code
    AtClientErrorCode = 22,
    /// AT_KDF_INPUT (23) - KDF input (network name)
    AtKdfInput = 23,
    /// AT_KDF (24) - Key derivation function
    AtKdf = 24,
    /// AT_IV (129) - Initialization vector
    AtIv = 129,
    /// AT_ENCR_DATA (130) - Encrypted data
    AtEncrData = 130,
    /// AT_NEXT_PSEUDONYM (132) - Next pseudonym
    AtNextPseudonym = 132,
    /// AT_NEXT_REAUTH_ID (133) - Next re-authentication identity
    AtNextReauthId = 133,
    /// AT_CHECKCODE (134) - Checkcode
    AtCheckcode = 134,
    /// AT_RESULT_IND (135) - Result indication
    AtResultInd = 135,
    /// AT_BIDDING (136) - Bidding down protection
    AtBidding = 136,
}

impl AttributeType {
    /// Attribute name as written in the RFCs
    pub fn name(self) -> &'static str {
        match self {
            AttributeType::AtRand => "AT_RAND",
            AttributeType::AtAutn => "AT_AUTN",
            AttributeType::AtRes => "AT_RES",
            AttributeType::AtAuts => "AT_AUTS",
            AttributeType::AtPadding => "AT_PADDING",
            AttributeType::AtNonceMt => "AT_NONCE_MT",
            AttributeType::AtPermanentIdReq => "AT_PERMANENT_ID_REQ",
            AttributeType::AtMac => "AT_MAC",
            AttributeType::AtNotification => "AT_NOTIFICATION",
            AttributeType::AtAnyIdReq => "AT_ANY_ID_REQ",
            AttributeType::AtIdentity => "AT_IDENTITY",
            AttributeType::AtVersionList => "AT_VERSION_LIST",
            AttributeType::AtSelectedVersion => "AT_SELECTED_VERSION",
            AttributeType::AtFullauthIdReq => "AT_FULLAUTH_ID_REQ",
            AttributeType::AtCounter => "AT_COUNTER",
            AttributeType::AtCounterTooSmall => "AT_COUNTER_TOO_SMALL",
            AttributeType::AtNonceS => "AT_NONCE_S",
            AttributeType::AtClientErrorCode => "AT_CLIENT_ERROR_CODE",
            AttributeType::AtKdfInput => "AT_KDF_INPUT",
            AttributeType::AtKdf => "AT_KDF",
            AttributeType::AtIv => "AT_IV",
            AttributeType::AtEncrData => "AT_ENCR_DATA",
            AttributeType::AtNextPseudonym => "AT_NEXT_PSEUDONYM",
            AttributeType::AtNextReauthId => "AT_NEXT_REAUTH_ID",
            AttributeType::AtCheckcode => "AT_CHECKCODE",
            AttributeType::AtResultInd => "AT_RESULT_IND",
            AttributeType::AtBidding => "AT_BIDDING",
        }
    }
}

/// Whether a receiver that does not implement `attribute_type` may skip it
pub fn is_skippable(attribute_type: u8) -> bool {
    attribute_type >= SKIPPABLE_ATTRIBUTE_RANGE_START
}

impl TryFrom<u8> for AttributeType {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(AttributeType::AtRand),
            2 => Ok(AttributeType::AtAutn),
            3 => Ok(AttributeType::AtRes),
            4 => Ok(AttributeType::AtAuts),
            6 => Ok(AttributeType::AtPadding),
            7 => Ok(AttributeType::AtNonceMt),
            10 => Ok(AttributeType::AtPermanentIdReq),
            11 => Ok(AttributeType::AtMac),
            12 => Ok(AttributeType::AtNotification),
            13 => Ok(AttributeType::AtAnyIdReq),
            14 => Ok(AttributeType::AtIdentity),
            15 => Ok(AttributeType::AtVersionList),
            16 => Ok(AttributeType::AtSelectedVersion),
            17 => Ok(AttributeType::AtFullauthIdReq),
            19 => Ok(AttributeType::AtCounter),
            20 => Ok(AttributeType::AtCounterTooSmall),
            21 => Ok(AttributeType::AtNonceS),
            22 => Ok(AttributeType::AtClientErrorCode),
            23 => Ok(AttributeType::AtKdfInput),
            24 => Ok(AttributeType::AtKdf),
            129 => Ok(AttributeType::AtIv),
            130 => Ok(AttributeType::AtEncrData),
            132 => Ok(AttributeType::AtNextPseudonym),
            133 => Ok(AttributeType::AtNextReauthId),
            134 => Ok(AttributeType::AtCheckcode),
            135 => Ok(AttributeType::AtResultInd),
            136 => Ok(AttributeType::AtBidding),
            _ => Err(DecodeError::UnknownAttributeType(value)),
        }
    }
}

impl From<AttributeType> for u8 {
    fn from(t: AttributeType) -> u8 {
        t as u8
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
