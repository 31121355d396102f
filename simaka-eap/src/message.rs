//! EAP packet framing (RFC 3748)
//!
//! ```text
//! +--------+------------+----------+--------+-------------+
//! |  Code  | Identifier |  Length  |  Type  |  Type-Data  |
//! | 1 byte |   1 byte   | 2 bytes  | 1 byte |  variable   |
//! +--------+------------+----------+--------+-------------+
//! ```
//!
//! Success and Failure packets stop after the length field. For the
//! EAP-SIM, EAP-AKA and EAP-AKA' types the Type-Data is handed to
//! [`TypeData`] with the method the type number implies.

use bytes::{Buf, BufMut};
use thiserror::Error;
use tracing::warn;

use crate::error::ClientErrorCode;
use crate::method::EapMethod;
use crate::type_data::{DecodeResult, TypeData};

/// Largest packet the 16-bit length field can describe
pub const MAX_EAP_PACKET_LEN: usize = u16::MAX as usize;

/// Code, identifier and length
pub const EAP_HEADER_LEN: usize = 4;

/// Error type for EAP packet framing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EapError {
    /// Buffer too short for decoding
    #[error("Buffer too short: expected at least {expected} bytes, got {actual}")]
    BufferTooShort {
        /// Expected minimum bytes
        expected: usize,
        /// Actual bytes available
        actual: usize,
    },
    /// Invalid EAP code
    #[error("Invalid EAP code: {0}")]
    InvalidCode(u8),
    /// Invalid EAP type
    #[error("Invalid EAP type: {0}")]
    InvalidType(u8),
    /// Length field inconsistent with the code
    #[error("Invalid length {length} for EAP {code}")]
    InvalidLength {
        /// Packet code
        code: EapCode,
        /// Length field
        length: usize,
    },
    /// Packet longer than the 16-bit length field can describe
    #[error("EAP packet of {0} bytes does not fit the length field")]
    TooLong(usize),
}

// ============================================================================
// EAP Code (RFC 3748 Section 4)
// ============================================================================

/// EAP Code values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EapCode {
    /// Request (1)
    Request = 1,
    /// Response (2)
    Response = 2,
    /// Success (3)
    Success = 3,
    /// Failure (4)
    Failure = 4,
}

impl EapCode {
    /// Whether packets with this code carry a type and type data
    pub fn has_data(self) -> bool {
        matches!(self, EapCode::Request | EapCode::Response)
    }
}

impl TryFrom<u8> for EapCode {
    type Error = EapError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(EapCode::Request),
            2 => Ok(EapCode::Response),
            3 => Ok(EapCode::Success),
            4 => Ok(EapCode::Failure),
            _ => Err(EapError::InvalidCode(value)),
        }
    }
}

impl From<EapCode> for u8 {
    fn from(code: EapCode) -> u8 {
        code as u8
    }
}

impl std::fmt::Display for EapCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EapCode::Request => "Request",
            EapCode::Response => "Response",
            EapCode::Success => "Success",
            EapCode::Failure => "Failure",
        };
        f.write_str(name)
    }
}

// ============================================================================
// EAP Type (RFC 3748 Section 5)
// ============================================================================

/// EAP Type values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EapType {
    /// Identity (1)
    Identity = 1,
    /// Notification (2)
    Notification = 2,
    /// Legacy Nak, Response only (3)
    LegacyNak = 3,
    /// EAP-SIM (18)
    EapSim = 18,
    /// EAP-AKA (23)
    EapAka = 23,
    /// EAP-AKA' (50)
    EapAkaPrime = 50,
}

impl EapType {
    /// SIM/AKA method carried by this type, if any
    pub fn method(self) -> Option<EapMethod> {
        EapMethod::from_eap_type(self.into())
    }
}

impl TryFrom<u8> for EapType {
    type Error = EapError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(EapType::Identity),
            2 => Ok(EapType::Notification),
            3 => Ok(EapType::LegacyNak),
            18 => Ok(EapType::EapSim),
            23 => Ok(EapType::EapAka),
            50 => Ok(EapType::EapAkaPrime),
            _ => Err(EapError::InvalidType(value)),
        }
    }
}

impl From<EapType> for u8 {
    fn from(t: EapType) -> u8 {
        t as u8
    }
}

impl From<EapMethod> for EapType {
    fn from(method: EapMethod) -> Self {
        match method {
            EapMethod::Sim => EapType::EapSim,
            EapMethod::Aka => EapType::EapAka,
            EapMethod::AkaPrime => EapType::EapAkaPrime,
        }
    }
}

// ============================================================================
// EAP Message
// ============================================================================

/// Type and raw type data of a Request or Response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EapData {
    /// EAP method type
    pub eap_type: EapType,
    /// Method specific type data
    pub type_data: Vec<u8>,
}

/// One EAP packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EapMessage {
    /// Packet code
    pub code: EapCode,
    /// Identifier matching requests with responses
    pub identifier: u8,
    /// Type and type data, absent for Success and Failure
    pub data: Option<EapData>,
}

impl EapMessage {
    /// EAP-Success
    pub fn success(identifier: u8) -> Self {
        Self {
            code: EapCode::Success,
            identifier,
            data: None,
        }
    }

    /// EAP-Failure
    pub fn failure(identifier: u8) -> Self {
        Self {
            code: EapCode::Failure,
            identifier,
            data: None,
        }
    }

    /// EAP-Request carrying `type_data`
    pub fn request(identifier: u8, eap_type: EapType, type_data: Vec<u8>) -> Self {
        Self {
            code: EapCode::Request,
            identifier,
            data: Some(EapData {
                eap_type,
                type_data,
            }),
        }
    }

    /// EAP-Response carrying `type_data`
    pub fn response(identifier: u8, eap_type: EapType, type_data: Vec<u8>) -> Self {
        Self {
            code: EapCode::Response,
            identifier,
            data: Some(EapData {
                eap_type,
                type_data,
            }),
        }
    }

    /// Response carrying encoded SIM/AKA type data
    pub fn sim_aka_response(identifier: u8, type_data: &TypeData) -> Self {
        Self::response(
            identifier,
            type_data.method().into(),
            type_data.encode_to_vec(),
        )
    }

    /// Client-Error response reporting `code`
    pub fn client_error_response(method: EapMethod, identifier: u8, code: ClientErrorCode) -> Self {
        Self::sim_aka_response(identifier, &TypeData::client_error(method, code))
    }

    /// SIM/AKA method of the packet's type, if any
    pub fn method(&self) -> Option<EapMethod> {
        self.data.as_ref().and_then(|data| data.eap_type.method())
    }

    /// Decode the carried type data with the method its EAP type implies.
    ///
    /// A packet without data, or with a type other than EAP-SIM, EAP-AKA or
    /// EAP-AKA', is reported as unable to process.
    pub fn sim_aka_type_data(&self) -> DecodeResult {
        match &self.data {
            Some(data) => match data.eap_type.method() {
                Some(method) => TypeData::decode(method, &data.type_data),
                None => {
                    warn!(eap_type = u8::from(data.eap_type), "Not a SIM/AKA packet");
                    Err(ClientErrorCode::UnableToProcess)
                }
            },
            None => {
                warn!(code = %self.code, "EAP packet carries no type data");
                Err(ClientErrorCode::UnableToProcess)
            }
        }
    }

    /// Packet encoding with the AT_MAC value zeroed.
    ///
    /// Fails with the client error code when the type data does not decode
    /// or the packet cannot be encoded.
    pub fn encode_with_zeroed_mac(&self) -> Result<Vec<u8>, ClientErrorCode> {
        let type_data = self.sim_aka_type_data()?;
        let zeroed = type_data.encode_with_zeroed_mac();
        let message = Self {
            code: self.code,
            identifier: self.identifier,
            data: Some(EapData {
                eap_type: type_data.method().into(),
                type_data: zeroed,
            }),
        };
        message.encode_to_vec().map_err(|err| {
            warn!(error = %err, "Failed to encode packet with zeroed MAC");
            ClientErrorCode::UnableToProcess
        })
    }

    /// Value of the length field
    pub fn encoded_len(&self) -> usize {
        match &self.data {
            Some(data) => EAP_HEADER_LEN + 1 + data.type_data.len(),
            None => EAP_HEADER_LEN,
        }
    }

    /// Encode the packet. Nothing is written when it is too long for the
    /// length field.
    pub fn encode<B: BufMut>(&self, buf: &mut B) -> Result<(), EapError> {
        let length = u16::try_from(self.encoded_len())
            .map_err(|_| EapError::TooLong(self.encoded_len()))?;
        buf.put_u8(self.code.into());
        buf.put_u8(self.identifier);
        buf.put_u16(length);
        if let Some(data) = &self.data {
            buf.put_u8(data.eap_type.into());
            buf.put_slice(&data.type_data);
        }
        Ok(())
    }

    /// Encode the packet to a new `Vec<u8>`
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, EapError> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode(&mut buf)?;
        Ok(buf)
    }

    /// Decode one packet. Bytes past the length field are left in `buf`.
    pub fn decode<B: Buf>(buf: &mut B) -> Result<Self, EapError> {
        if buf.remaining() < EAP_HEADER_LEN {
            return Err(EapError::BufferTooShort {
                expected: EAP_HEADER_LEN,
                actual: buf.remaining(),
            });
        }

        let code = EapCode::try_from(buf.get_u8())?;
        let identifier = buf.get_u8();
        let length = buf.get_u16() as usize;

        if !code.has_data() {
            if length != EAP_HEADER_LEN {
                return Err(EapError::InvalidLength { code, length });
            }
            return Ok(Self {
                code,
                identifier,
                data: None,
            });
        }

        if length <= EAP_HEADER_LEN {
            return Err(EapError::InvalidLength { code, length });
        }
        let body_len = length - EAP_HEADER_LEN;
        if buf.remaining() < body_len {
            return Err(EapError::BufferTooShort {
                expected: body_len,
                actual: buf.remaining(),
            });
        }

        let eap_type_raw = buf.get_u8();
        let mut type_data = vec![0u8; body_len - 1];
        buf.copy_to_slice(&mut type_data);
        let eap_type = EapType::try_from(eap_type_raw)?;

        Ok(Self {
            code,
            identifier,
            data: Some(EapData {
                eap_type,
                type_data,
            }),
        })
    }
}
