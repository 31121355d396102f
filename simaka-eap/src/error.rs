//! Error types for the type-data codec
//!
//! Untrusted input never surfaces as anything richer than a
//! [`ClientErrorCode`]: the detailed [`DecodeError`] is logged and then mapped
//! to the code a peer would put in AT_CLIENT_ERROR_CODE. Outbound
//! construction mistakes are programmer errors and are reported as
//! [`TypeDataError`].

use thiserror::Error;

use crate::attribute::AttributeType;
use crate::method::EapMethod;

// ============================================================================
// Client error codes (RFC 4186 Section 10.19, RFC 4187 Section 10.20)
// ============================================================================

/// Client error codes carried in AT_CLIENT_ERROR_CODE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[repr(u16)]
pub enum ClientErrorCode {
    /// Unable to process packet (0)
    #[error("unable to process packet")]
    UnableToProcess = 0,
    /// Unsupported version (1), EAP-SIM only
    #[error("unsupported version")]
    UnsupportedVersion = 1,
    /// Insufficient number of challenges (2), EAP-SIM only
    #[error("insufficient number of challenges")]
    InsufficientChallenges = 2,
    /// RANDs are not fresh (3), EAP-SIM only
    #[error("RANDs are not fresh")]
    RandNotFresh = 3,
}

impl TryFrom<u16> for ClientErrorCode {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ClientErrorCode::UnableToProcess),
            1 => Ok(ClientErrorCode::UnsupportedVersion),
            2 => Ok(ClientErrorCode::InsufficientChallenges),
            3 => Ok(ClientErrorCode::RandNotFresh),
            other => Err(other),
        }
    }
}

impl From<ClientErrorCode> for u16 {
    fn from(code: ClientErrorCode) -> u16 {
        code as u16
    }
}

// ============================================================================
// Decode errors
// ============================================================================

/// Why a received type-data buffer could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No buffer was supplied at all
    #[error("No type data present")]
    MissingData,
    /// Buffer too short for the next field
    #[error("Buffer too short: expected at least {expected} bytes, got {actual}")]
    BufferTooShort {
        /// Expected minimum bytes
        expected: usize,
        /// Actual bytes available
        actual: usize,
    },
    /// Subtype not legal for the method
    #[error("Invalid {method} subtype: {subtype}")]
    InvalidSubtype {
        /// Method whose table was consulted
        method: EapMethod,
        /// Subtype read from the wire
        subtype: u8,
    },
    /// Attribute with a length field of zero
    #[error("Attribute {0} has a zero length field")]
    ZeroLength(u8),
    /// Attribute length runs past the end of the buffer
    #[error("Attribute {attribute} length {length} exceeds remaining {remaining} bytes")]
    LengthExceedsBuffer {
        /// Attribute type code
        attribute: u8,
        /// Value length announced by the length field
        length: usize,
        /// Bytes left in the buffer
        remaining: usize,
    },
    /// Attribute length does not fit the attribute's layout
    #[error("Invalid {attribute} length: {length} bytes")]
    InvalidLength {
        /// Attribute type
        attribute: AttributeType,
        /// Total attribute length in bytes
        length: usize,
    },
    /// Attribute value violates the attribute's own rules
    #[error("Invalid {attribute} value: {reason}")]
    InvalidValue {
        /// Attribute type
        attribute: AttributeType,
        /// What was wrong
        reason: String,
    },
    /// AT_RAND value is not reserved bytes followed by whole RANDs
    #[error("AT_RAND value of {length} bytes is not a list of RANDs")]
    MalformedRand {
        /// Value length in bytes, reserved field included
        length: usize,
    },
    /// AT_RAND carries a number of RANDs the method does not accept
    #[error("AT_RAND carries {count} RAND value(s)")]
    InvalidRandCount {
        /// Number of 16-byte RANDs found
        count: usize,
    },
    /// AT_RAND repeats a RAND value
    #[error("AT_RAND contains repeated RAND values")]
    RandNotFresh,
    /// Attribute type code is not a known attribute type
    #[error("Unknown attribute type: {0}")]
    UnknownAttributeType(u8),
    /// Non-skippable attribute the method does not implement
    #[error("Unsupported non-skippable attribute: {0}")]
    UnsupportedAttribute(u8),
    /// Attribute type appears twice
    #[error("Duplicate attribute: {0}")]
    DuplicateAttribute(u8),
}

impl DecodeError {
    /// Client error code reported to the peer for this failure.
    ///
    /// RAND problems only have dedicated codes in EAP-SIM; EAP-AKA and
    /// EAP-AKA' define nothing beyond "unable to process".
    pub fn client_error_code(&self, method: EapMethod) -> ClientErrorCode {
        match (self, method) {
            (
                DecodeError::InvalidRandCount { .. } | DecodeError::MalformedRand { .. },
                EapMethod::Sim,
            ) => ClientErrorCode::InsufficientChallenges,
            (DecodeError::RandNotFresh, EapMethod::Sim) => ClientErrorCode::RandNotFresh,
            _ => ClientErrorCode::UnableToProcess,
        }
    }
}

// ============================================================================
// Construction errors
// ============================================================================

/// Argument validation failure when building type data for sending
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeDataError {
    /// Subtype not legal for the method
    #[error("Subtype {subtype} is not supported by {method}")]
    UnsupportedSubtype {
        /// Target method
        method: EapMethod,
        /// Rejected subtype
        subtype: u8,
    },
    /// Same attribute type supplied twice
    #[error("Duplicate attribute type: {0}")]
    DuplicateAttribute(u8),
    /// Attribute kind the method does not carry
    #[error("Attribute {attribute} is not supported by {method}")]
    AttributeNotAllowed {
        /// Target method
        method: EapMethod,
        /// Rejected attribute type code
        attribute: u8,
    },
    /// Attribute value cannot be encoded
    #[error("Invalid attribute {attribute}: {reason}")]
    InvalidAttribute {
        /// Attribute type code
        attribute: u8,
        /// What was wrong
        reason: String,
    },
    /// Encoded type data does not fit an EAP packet
    #[error("Type data of {length} bytes exceeds {max}")]
    TooLong {
        /// Encoded length in bytes
        length: usize,
        /// Largest length an EAP packet can carry
        max: usize,
    },
}
