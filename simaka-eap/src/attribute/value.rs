//! Attribute values and the method-aware attribute factory
//!
//! Every attribute on the wire is
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |     Type      |    Length     |           Value...
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! where Length counts 4-byte units and covers the Type and Length octets.
//! Variable-length values are zero padded to the next 4-byte boundary.

use std::collections::HashSet;
use std::fmt;

use bytes::{Buf, BufMut};
use simaka_common::HexDump;

use super::types::{is_skippable, AttributeType};
use crate::error::{ClientErrorCode, DecodeError, TypeDataError};
use crate::method::EapMethod;

/// Attribute length unit in bytes
pub const LENGTH_SCALING: usize = 4;
/// Largest attribute a one-byte length field can describe
pub const MAX_ATTRIBUTE_LENGTH: usize = u8::MAX as usize * LENGTH_SCALING;

/// RAND length
pub const RAND_LEN: usize = 16;
/// AUTN length
pub const AUTN_LEN: usize = 16;
/// AUTS length
pub const AUTS_LEN: usize = 14;
/// MAC length
pub const MAC_LEN: usize = 16;
/// NONCE_MT / NONCE_S length
pub const NONCE_LEN: usize = 16;
/// IV length
pub const IV_LEN: usize = 16;
/// Smallest RES in bytes (32 bits)
pub const MIN_RES_LEN: usize = 4;
/// Largest RES in bytes (128 bits)
pub const MAX_RES_LEN: usize = 16;
/// Checkcode lengths: empty, SHA-1 (AKA), SHA-256 (AKA')
pub const CHECKCODE_LENGTHS: [usize; 3] = [0, 20, 32];

/// S bit of AT_NOTIFICATION: set when the notification reports success
pub const NOTIFICATION_SUCCESS_BIT: u16 = 0x8000;
/// P bit of AT_NOTIFICATION: set when sent before the challenge round
pub const NOTIFICATION_PRE_CHALLENGE_BIT: u16 = 0x4000;
/// D bit of AT_BIDDING: server supports EAP-AKA'
pub const BIDDING_SUPPORTS_AKA_PRIME: u16 = 0x8000;

const HEADER_LEN: usize = 2;
const RESERVED_LEN: usize = 2;

/// Total attribute length once padded to the length unit
fn padded(len: usize) -> usize {
    len.div_ceil(LENGTH_SCALING) * LENGTH_SCALING
}

/// A decoded or to-be-encoded attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// AT_RAND: one (AKA) or two to three (SIM) RAND values
    Rand(Vec<[u8; RAND_LEN]>),
    /// AT_AUTN
    Autn([u8; AUTN_LEN]),
    /// AT_RES, 4 to 16 bytes
    Res(Vec<u8>),
    /// AT_AUTS
    Auts([u8; AUTS_LEN]),
    /// AT_PADDING: total attribute length in bytes (4, 8 or 12)
    Padding(usize),
    /// AT_NONCE_MT
    NonceMt([u8; NONCE_LEN]),
    /// AT_PERMANENT_ID_REQ
    PermanentIdReq,
    /// AT_MAC
    Mac([u8; MAC_LEN]),
    /// AT_NOTIFICATION, including the S and P bits
    Notification(u16),
    /// AT_ANY_ID_REQ
    AnyIdReq,
    /// AT_IDENTITY
    Identity(Vec<u8>),
    /// AT_VERSION_LIST
    VersionList(Vec<u16>),
    /// AT_SELECTED_VERSION
    SelectedVersion(u16),
    /// AT_FULLAUTH_ID_REQ
    FullauthIdReq,
    /// AT_COUNTER
    Counter(u16),
    /// AT_COUNTER_TOO_SMALL
    CounterTooSmall,
    /// AT_NONCE_S
    NonceS([u8; NONCE_LEN]),
    /// AT_CLIENT_ERROR_CODE, raw so unknown codes survive a round trip
    ClientErrorCode(u16),
    /// AT_KDF_INPUT: network name
    KdfInput(Vec<u8>),
    /// AT_KDF
    Kdf(u16),
    /// AT_IV
    Iv([u8; IV_LEN]),
    /// AT_ENCR_DATA: ciphertext, a non-empty multiple of 16 bytes
    EncrData(Vec<u8>),
    /// AT_NEXT_PSEUDONYM
    NextPseudonym(Vec<u8>),
    /// AT_NEXT_REAUTH_ID
    NextReauthId(Vec<u8>),
    /// AT_CHECKCODE: empty, 20 or 32 bytes
    Checkcode(Vec<u8>),
    /// AT_RESULT_IND
    ResultInd,
    /// AT_BIDDING
    Bidding {
        /// D bit
        supports_aka_prime: bool,
    },
    /// Skippable attribute the method does not implement, kept verbatim
    Unsupported {
        /// Attribute type code (128 or above)
        attribute_type: u8,
        /// Value bytes following the type and length octets
        data: Vec<u8>,
    },
}

impl Attribute {
    /// AT_CLIENT_ERROR_CODE carrying `code`
    pub fn client_error(code: ClientErrorCode) -> Self {
        Attribute::ClientErrorCode(code.into())
    }

    /// Attribute type code as written on the wire
    pub fn attribute_type(&self) -> u8 {
        match self.kind() {
            Ok(t) => t.into(),
            Err(code) => code,
        }
    }

    /// Known attribute type, `None` for [`Attribute::Unsupported`]
    pub fn known_type(&self) -> Option<AttributeType> {
        self.kind().ok()
    }

    fn kind(&self) -> Result<AttributeType, u8> {
        let t = match self {
            Attribute::Rand(_) => AttributeType::AtRand,
            Attribute::Autn(_) => AttributeType::AtAutn,
            Attribute::Res(_) => AttributeType::AtRes,
            Attribute::Auts(_) => AttributeType::AtAuts,
            Attribute::Padding(_) => AttributeType::AtPadding,
            Attribute::NonceMt(_) => AttributeType::AtNonceMt,
            Attribute::PermanentIdReq => AttributeType::AtPermanentIdReq,
            Attribute::Mac(_) => AttributeType::AtMac,
            Attribute::Notification(_) => AttributeType::AtNotification,
            Attribute::AnyIdReq => AttributeType::AtAnyIdReq,
            Attribute::Identity(_) => AttributeType::AtIdentity,
            Attribute::VersionList(_) => AttributeType::AtVersionList,
            Attribute::SelectedVersion(_) => AttributeType::AtSelectedVersion,
            Attribute::FullauthIdReq => AttributeType::AtFullauthIdReq,
            Attribute::Counter(_) => AttributeType::AtCounter,
            Attribute::CounterTooSmall => AttributeType::AtCounterTooSmall,
            Attribute::NonceS(_) => AttributeType::AtNonceS,
            Attribute::ClientErrorCode(_) => AttributeType::AtClientErrorCode,
            Attribute::KdfInput(_) => AttributeType::AtKdfInput,
            Attribute::Kdf(_) => AttributeType::AtKdf,
            Attribute::Iv(_) => AttributeType::AtIv,
            Attribute::EncrData(_) => AttributeType::AtEncrData,
            Attribute::NextPseudonym(_) => AttributeType::AtNextPseudonym,
            Attribute::NextReauthId(_) => AttributeType::AtNextReauthId,
            Attribute::Checkcode(_) => AttributeType::AtCheckcode,
            Attribute::ResultInd => AttributeType::AtResultInd,
            Attribute::Bidding { .. } => AttributeType::AtBidding,
            Attribute::Unsupported { attribute_type, .. } => return Err(*attribute_type),
        };
        Ok(t)
    }

    /// Whether this is a retained skippable attribute
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Attribute::Unsupported { .. })
    }

    /// Header plus value, before padding
    fn unpadded_len(&self) -> usize {
        let value_len = match self {
            Attribute::Rand(rands) => RESERVED_LEN + rands.len() * RAND_LEN,
            Attribute::Autn(_)
            | Attribute::NonceMt(_)
            | Attribute::Mac(_)
            | Attribute::NonceS(_)
            | Attribute::Iv(_) => RESERVED_LEN + 16,
            Attribute::Res(res) => 2 + res.len(),
            Attribute::Auts(_) => AUTS_LEN,
            Attribute::Padding(length) => length.saturating_sub(HEADER_LEN),
            Attribute::PermanentIdReq
            | Attribute::AnyIdReq
            | Attribute::FullauthIdReq
            | Attribute::CounterTooSmall
            | Attribute::ResultInd => RESERVED_LEN,
            Attribute::Notification(_)
            | Attribute::SelectedVersion(_)
            | Attribute::Counter(_)
            | Attribute::ClientErrorCode(_)
            | Attribute::Kdf(_)
            | Attribute::Bidding { .. } => 2,
            Attribute::Identity(bytes)
            | Attribute::KdfInput(bytes)
            | Attribute::NextPseudonym(bytes)
            | Attribute::NextReauthId(bytes) => 2 + bytes.len(),
            Attribute::VersionList(versions) => 2 + versions.len() * 2,
            Attribute::EncrData(data) | Attribute::Checkcode(data) => RESERVED_LEN + data.len(),
            Attribute::Unsupported { data, .. } => data.len(),
        };
        HEADER_LEN + value_len
    }

    /// Encoded length in bytes, including type, length and padding
    pub fn encoded_len(&self) -> usize {
        padded(self.unpadded_len())
    }

    /// Encode the attribute, padding with zeros to the length unit.
    ///
    /// Only attributes that passed [`Attribute::validate`] fit the one-byte
    /// length field, so encoding stays behind [`crate::TypeData`].
    pub(crate) fn encode<B: BufMut>(&self, buf: &mut B) {
        let total = self.encoded_len();
        buf.put_u8(self.attribute_type());
        buf.put_u8((total / LENGTH_SCALING) as u8);

        match self {
            Attribute::Rand(rands) => {
                buf.put_u16(0);
                for rand in rands {
                    buf.put_slice(rand);
                }
            }
            Attribute::Autn(value)
            | Attribute::NonceMt(value)
            | Attribute::Mac(value)
            | Attribute::NonceS(value)
            | Attribute::Iv(value) => {
                buf.put_u16(0);
                buf.put_slice(value);
            }
            Attribute::Res(res) => {
                buf.put_u16((res.len() * 8) as u16);
                buf.put_slice(res);
            }
            Attribute::Auts(auts) => buf.put_slice(auts),
            Attribute::Padding(length) => buf.put_bytes(0, length.saturating_sub(HEADER_LEN)),
            Attribute::PermanentIdReq
            | Attribute::AnyIdReq
            | Attribute::FullauthIdReq
            | Attribute::CounterTooSmall
            | Attribute::ResultInd => buf.put_u16(0),
            Attribute::Notification(value)
            | Attribute::SelectedVersion(value)
            | Attribute::Counter(value)
            | Attribute::ClientErrorCode(value)
            | Attribute::Kdf(value) => buf.put_u16(*value),
            Attribute::Bidding { supports_aka_prime } => buf.put_u16(if *supports_aka_prime {
                BIDDING_SUPPORTS_AKA_PRIME
            } else {
                0
            }),
            Attribute::Identity(bytes)
            | Attribute::KdfInput(bytes)
            | Attribute::NextPseudonym(bytes)
            | Attribute::NextReauthId(bytes) => {
                buf.put_u16(bytes.len() as u16);
                buf.put_slice(bytes);
            }
            Attribute::VersionList(versions) => {
                buf.put_u16((versions.len() * 2) as u16);
                for version in versions {
                    buf.put_u16(*version);
                }
            }
            Attribute::EncrData(data) | Attribute::Checkcode(data) => {
                buf.put_u16(0);
                buf.put_slice(data);
            }
            Attribute::Unsupported { data, .. } => buf.put_slice(data),
        }

        let padding = total - self.unpadded_len();
        buf.put_bytes(0, padding);
    }

    /// Decode one attribute from `buf` with `method`'s attribute factory.
    ///
    /// Known attributes the method implements are parsed into their typed
    /// variant. Anything else is kept as [`Attribute::Unsupported`] when its
    /// type is skippable and rejected otherwise.
    pub fn decode<B: Buf>(buf: &mut B, method: EapMethod) -> Result<Self, DecodeError> {
        if buf.remaining() < HEADER_LEN {
            return Err(DecodeError::BufferTooShort {
                expected: HEADER_LEN,
                actual: buf.remaining(),
            });
        }

        let attribute_type = buf.get_u8();
        let length = buf.get_u8() as usize * LENGTH_SCALING;
        if length == 0 {
            return Err(DecodeError::ZeroLength(attribute_type));
        }

        let value_len = length - HEADER_LEN;
        if buf.remaining() < value_len {
            return Err(DecodeError::LengthExceedsBuffer {
                attribute: attribute_type,
                length: value_len,
                remaining: buf.remaining(),
            });
        }
        let mut value = vec![0u8; value_len];
        buf.copy_to_slice(&mut value);

        match AttributeType::try_from(attribute_type) {
            Ok(known) if method.supports_attribute(known) => decode_value(known, &value, method),
            _ if is_skippable(attribute_type) => Ok(Attribute::Unsupported {
                attribute_type,
                data: value,
            }),
            _ => Err(DecodeError::UnsupportedAttribute(attribute_type)),
        }
    }

    /// Check that the attribute can be sent in a `method` message.
    pub(crate) fn validate(&self, method: EapMethod) -> Result<(), TypeDataError> {
        let attribute = self.attribute_type();
        let invalid = |reason: String| TypeDataError::InvalidAttribute { attribute, reason };

        match self.known_type() {
            Some(known) if !method.supports_attribute(known) => {
                return Err(TypeDataError::AttributeNotAllowed { method, attribute });
            }
            Some(_) => {}
            None => {
                if !is_skippable(attribute) {
                    return Err(invalid("unsupported attributes must be skippable".into()));
                }
                if matches!(AttributeType::try_from(attribute), Ok(t) if method.supports_attribute(t))
                {
                    return Err(invalid(format!("{method} implements this attribute")));
                }
            }
        }

        match self {
            Attribute::Rand(rands) => {
                if !method.accepts_rand_count(rands.len()) {
                    return Err(invalid(format!(
                        "{method} does not accept {} RAND value(s)",
                        rands.len()
                    )));
                }
                if has_repeated_rand(rands) {
                    return Err(invalid("RAND values must be distinct".into()));
                }
            }
            Attribute::Res(res) if !(MIN_RES_LEN..=MAX_RES_LEN).contains(&res.len()) => {
                return Err(invalid(format!("RES must be 4 to 16 bytes, got {}", res.len())));
            }
            Attribute::Padding(length) if ![4, 8, 12].contains(length) => {
                return Err(invalid(format!("padding must be 4, 8 or 12 bytes, got {length}")));
            }
            Attribute::VersionList(versions) if versions.is_empty() => {
                return Err(invalid("version list is empty".into()));
            }
            Attribute::EncrData(data) if data.is_empty() || data.len() % 16 != 0 => {
                return Err(invalid(format!(
                    "encrypted data must be a non-empty multiple of 16 bytes, got {}",
                    data.len()
                )));
            }
            Attribute::Checkcode(data) if !CHECKCODE_LENGTHS.contains(&data.len()) => {
                return Err(invalid(format!("checkcode length {} not allowed", data.len())));
            }
            Attribute::Unsupported { data, .. } if (data.len() + HEADER_LEN) % LENGTH_SCALING != 0 => {
                return Err(invalid("raw value is not aligned to 4 bytes".into()));
            }
            _ => {}
        }

        if self.encoded_len() > MAX_ATTRIBUTE_LENGTH {
            return Err(invalid(format!(
                "encoded length {} exceeds {MAX_ATTRIBUTE_LENGTH}",
                self.encoded_len()
            )));
        }
        Ok(())
    }
}

fn has_repeated_rand(rands: &[[u8; RAND_LEN]]) -> bool {
    let mut seen = HashSet::with_capacity(rands.len());
    rands.iter().any(|rand| !seen.insert(rand))
}

// ============================================================================
// Value decoding
// ============================================================================

fn invalid_length(attribute: AttributeType, value: &[u8]) -> DecodeError {
    DecodeError::InvalidLength {
        attribute,
        length: value.len() + HEADER_LEN,
    }
}

fn invalid_value(attribute: AttributeType, reason: impl Into<String>) -> DecodeError {
    DecodeError::InvalidValue {
        attribute,
        reason: reason.into(),
    }
}

fn expect_len(attribute: AttributeType, value: &[u8], len: usize) -> Result<(), DecodeError> {
    if value.len() == len {
        Ok(())
    } else {
        Err(invalid_length(attribute, value))
    }
}

/// Reserved(2) followed by a 16-byte field
fn reserved_and_16(attribute: AttributeType, value: &[u8]) -> Result<[u8; 16], DecodeError> {
    expect_len(attribute, value, RESERVED_LEN + 16)?;
    let mut out = [0u8; 16];
    out.copy_from_slice(&value[RESERVED_LEN..]);
    Ok(out)
}

fn single_u16(attribute: AttributeType, value: &[u8]) -> Result<u16, DecodeError> {
    expect_len(attribute, value, 2)?;
    Ok(u16::from_be_bytes([value[0], value[1]]))
}

/// Actual-length(2) prefixed bytes followed by fewer than four padding bytes.
///
/// `scale` converts the length field to bytes (8 for AT_RES, which counts bits).
fn length_prefixed(
    attribute: AttributeType,
    value: &[u8],
    scale: usize,
) -> Result<&[u8], DecodeError> {
    if value.len() < 2 {
        return Err(invalid_length(attribute, value));
    }
    let raw = u16::from_be_bytes([value[0], value[1]]) as usize;
    if raw % scale != 0 {
        return Err(invalid_value(
            attribute,
            format!("length {raw} is not a multiple of {scale}"),
        ));
    }
    let actual = raw / scale;
    let available = value.len() - 2;
    if actual > available {
        return Err(invalid_value(
            attribute,
            format!("actual length {actual} exceeds {available} available bytes"),
        ));
    }
    if available - actual >= LENGTH_SCALING {
        return Err(invalid_length(attribute, value));
    }
    Ok(&value[2..2 + actual])
}

fn decode_value(
    attribute: AttributeType,
    value: &[u8],
    method: EapMethod,
) -> Result<Attribute, DecodeError> {
    let decoded = match attribute {
        AttributeType::AtRand => {
            if value.len() < RESERVED_LEN || (value.len() - RESERVED_LEN) % RAND_LEN != 0 {
                return Err(DecodeError::MalformedRand {
                    length: value.len(),
                });
            }
            let rands: Vec<[u8; RAND_LEN]> = value[RESERVED_LEN..]
                .chunks_exact(RAND_LEN)
                .map(|chunk| {
                    let mut rand = [0u8; RAND_LEN];
                    rand.copy_from_slice(chunk);
                    rand
                })
                .collect();
            if !method.accepts_rand_count(rands.len()) {
                return Err(DecodeError::InvalidRandCount { count: rands.len() });
            }
            if has_repeated_rand(&rands) {
                return Err(DecodeError::RandNotFresh);
            }
            Attribute::Rand(rands)
        }
        AttributeType::AtAutn => Attribute::Autn(reserved_and_16(attribute, value)?),
        AttributeType::AtRes => {
            let res = length_prefixed(attribute, value, 8)?;
            if !(MIN_RES_LEN..=MAX_RES_LEN).contains(&res.len()) {
                return Err(invalid_value(
                    attribute,
                    format!("RES of {} bytes outside 4..=16", res.len()),
                ));
            }
            Attribute::Res(res.to_vec())
        }
        AttributeType::AtAuts => {
            expect_len(attribute, value, AUTS_LEN)?;
            let mut auts = [0u8; AUTS_LEN];
            auts.copy_from_slice(value);
            Attribute::Auts(auts)
        }
        AttributeType::AtPadding => {
            let length = value.len() + HEADER_LEN;
            if length > 12 {
                return Err(invalid_length(attribute, value));
            }
            if value.iter().any(|&b| b != 0) {
                return Err(invalid_value(attribute, "padding bytes must be zero"));
            }
            Attribute::Padding(length)
        }
        AttributeType::AtNonceMt => Attribute::NonceMt(reserved_and_16(attribute, value)?),
        AttributeType::AtPermanentIdReq => {
            expect_len(attribute, value, RESERVED_LEN)?;
            Attribute::PermanentIdReq
        }
        AttributeType::AtMac => Attribute::Mac(reserved_and_16(attribute, value)?),
        AttributeType::AtNotification => Attribute::Notification(single_u16(attribute, value)?),
        AttributeType::AtAnyIdReq => {
            expect_len(attribute, value, RESERVED_LEN)?;
            Attribute::AnyIdReq
        }
        AttributeType::AtIdentity => Attribute::Identity(length_prefixed(attribute, value, 1)?.to_vec()),
        AttributeType::AtVersionList => {
            let list = length_prefixed(attribute, value, 1)?;
            if list.is_empty() || list.len() % 2 != 0 {
                return Err(invalid_value(
                    attribute,
                    format!("version list of {} bytes", list.len()),
                ));
            }
            Attribute::VersionList(
                list.chunks_exact(2)
                    .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                    .collect(),
            )
        }
        AttributeType::AtSelectedVersion => Attribute::SelectedVersion(single_u16(attribute, value)?),
        AttributeType::AtFullauthIdReq => {
            expect_len(attribute, value, RESERVED_LEN)?;
            Attribute::FullauthIdReq
        }
        AttributeType::AtCounter => Attribute::Counter(single_u16(attribute, value)?),
        AttributeType::AtCounterTooSmall => {
            expect_len(attribute, value, RESERVED_LEN)?;
            Attribute::CounterTooSmall
        }
        AttributeType::AtNonceS => Attribute::NonceS(reserved_and_16(attribute, value)?),
        AttributeType::AtClientErrorCode => Attribute::ClientErrorCode(single_u16(attribute, value)?),
        AttributeType::AtKdfInput => Attribute::KdfInput(length_prefixed(attribute, value, 1)?.to_vec()),
        AttributeType::AtKdf => Attribute::Kdf(single_u16(attribute, value)?),
        AttributeType::AtIv => Attribute::Iv(reserved_and_16(attribute, value)?),
        AttributeType::AtEncrData => {
            if value.len() < RESERVED_LEN {
                return Err(invalid_length(attribute, value));
            }
            let data = &value[RESERVED_LEN..];
            if data.is_empty() || data.len() % 16 != 0 {
                return Err(invalid_length(attribute, value));
            }
            Attribute::EncrData(data.to_vec())
        }
        AttributeType::AtNextPseudonym => {
            Attribute::NextPseudonym(length_prefixed(attribute, value, 1)?.to_vec())
        }
        AttributeType::AtNextReauthId => {
            Attribute::NextReauthId(length_prefixed(attribute, value, 1)?.to_vec())
        }
        AttributeType::AtCheckcode => {
            if value.len() < RESERVED_LEN
                || !CHECKCODE_LENGTHS.contains(&(value.len() - RESERVED_LEN))
            {
                return Err(invalid_length(attribute, value));
            }
            Attribute::Checkcode(value[RESERVED_LEN..].to_vec())
        }
        AttributeType::AtResultInd => {
            expect_len(attribute, value, RESERVED_LEN)?;
            Attribute::ResultInd
        }
        AttributeType::AtBidding => {
            let bits = single_u16(attribute, value)?;
            Attribute::Bidding {
                supports_aka_prime: bits & BIDDING_SUPPORTS_AKA_PRIME != 0,
            }
        }
    };
    Ok(decoded)
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known_type() {
            Some(t) => write!(f, "{t}")?,
            None => write!(f, "AT_UNKNOWN({})", self.attribute_type())?,
        }

        match self {
            Attribute::Rand(rands) => {
                let joined: Vec<String> = rands.iter().map(|r| HexDump(r).to_string()).collect();
                write!(f, " [{}]", joined.join(", "))
            }
            Attribute::Autn(v)
            | Attribute::NonceMt(v)
            | Attribute::Mac(v)
            | Attribute::NonceS(v)
            | Attribute::Iv(v) => write!(f, " {}", HexDump(v)),
            Attribute::Auts(v) => write!(f, " {}", HexDump(v)),
            Attribute::Res(v) | Attribute::EncrData(v) | Attribute::Checkcode(v) => {
                write!(f, " {}", HexDump(v))
            }
            Attribute::Identity(v)
            | Attribute::KdfInput(v)
            | Attribute::NextPseudonym(v)
            | Attribute::NextReauthId(v) => write!(f, " \"{}\"", String::from_utf8_lossy(v)),
            Attribute::Padding(length) => write!(f, " ({length} bytes)"),
            Attribute::Notification(code) => write!(
                f,
                " {code} (success={}, pre-challenge={})",
                code & NOTIFICATION_SUCCESS_BIT != 0,
                code & NOTIFICATION_PRE_CHALLENGE_BIT != 0
            ),
            Attribute::ClientErrorCode(code) => match ClientErrorCode::try_from(*code) {
                Ok(known) => write!(f, " {code} ({known})"),
                Err(_) => write!(f, " {code}"),
            },
            Attribute::VersionList(versions) => write!(f, " {versions:?}"),
            Attribute::SelectedVersion(v) | Attribute::Counter(v) | Attribute::Kdf(v) => {
                write!(f, " {v}")
            }
            Attribute::Bidding { supports_aka_prime } => {
                write!(f, " (supports AKA'={supports_aka_prime})")
            }
            Attribute::Unsupported { data, .. } => write!(f, " skipped {}", HexDump(data)),
            Attribute::PermanentIdReq
            | Attribute::AnyIdReq
            | Attribute::FullauthIdReq
            | Attribute::CounterTooSmall
            | Attribute::ResultInd => Ok(()),
        }
    }
}
