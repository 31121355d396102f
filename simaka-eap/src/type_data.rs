//! Type-data envelope
//!
//! The Type-Data of an EAP-SIM, EAP-AKA or EAP-AKA' packet:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |    Subtype    |           Reserved            |  Attributes...
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! One [`TypeData`] type serves all three methods; the [`EapMethod`] it
//! carries selects the subtype table and the attribute factory.

use bytes::{Buf, BufMut};
use simaka_common::logging::{log_eap_message, Direction, HexDump};
use tracing::{debug, trace, warn};

use crate::attribute::{Attribute, AttributeType, Attributes, MAC_LEN};
use crate::error::{ClientErrorCode, DecodeError, TypeDataError};
use crate::message::EAP_HEADER_LEN;
use crate::method::{subtype, EapMethod};

/// Subtype plus reserved bytes
pub const TYPE_DATA_HEADER_LEN: usize = 3;
/// Largest type data an EAP packet can carry: the 16-bit length field
/// minus the EAP header and type byte
pub const MAX_TYPE_DATA_LEN: usize = u16::MAX as usize - EAP_HEADER_LEN - 1;

/// Outcome of decoding received type data
pub type DecodeResult = Result<TypeData, ClientErrorCode>;

/// Subtype, reserved bytes and attributes of one EAP-SIM/AKA/AKA' packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeData {
    method: EapMethod,
    subtype: u8,
    reserved: [u8; 2],
    attributes: Attributes,
}

impl TypeData {
    /// Build type data for sending, with zero reserved bytes.
    ///
    /// Fails when the subtype is not legal for `method`, when two attributes
    /// share a type, when an attribute cannot be carried or encoded, or when
    /// the whole encoding would not fit an EAP packet.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simaka_eap::{Attribute, EapMethod, TypeData};
    /// use simaka_eap::method::subtype;
    ///
    /// let type_data = TypeData::new(
    ///     EapMethod::Aka,
    ///     subtype::AKA_CHALLENGE,
    ///     vec![Attribute::Res(vec![0x11; 8]), Attribute::Mac([0; 16])],
    /// )
    /// .unwrap();
    ///
    /// let bytes = type_data.encode_to_vec();
    /// assert_eq!(TypeData::decode(EapMethod::Aka, &bytes), Ok(type_data));
    /// ```
    pub fn new(
        method: EapMethod,
        subtype: u8,
        attributes: Vec<Attribute>,
    ) -> Result<Self, TypeDataError> {
        Self::with_reserved(method, subtype, [0, 0], attributes)
    }

    /// Build type data for sending with explicit reserved bytes
    pub fn with_reserved(
        method: EapMethod,
        subtype: u8,
        reserved: [u8; 2],
        attributes: Vec<Attribute>,
    ) -> Result<Self, TypeDataError> {
        if !method.supports_subtype(subtype) {
            return Err(TypeDataError::UnsupportedSubtype { method, subtype });
        }

        let mut map = Attributes::new();
        for attribute in attributes {
            attribute.validate(method)?;
            map.insert(attribute)
                .map_err(|dup| TypeDataError::DuplicateAttribute(dup.attribute_type()))?;
        }

        let type_data = Self {
            method,
            subtype,
            reserved,
            attributes: map,
        };
        let length = type_data.encoded_len();
        if length > MAX_TYPE_DATA_LEN {
            return Err(TypeDataError::TooLong {
                length,
                max: MAX_TYPE_DATA_LEN,
            });
        }
        Ok(type_data)
    }

    /// Client-Error type data carrying `code`
    pub fn client_error(method: EapMethod, code: ClientErrorCode) -> Self {
        let mut attributes = Attributes::new();
        // Empty container, cannot collide
        let _ = attributes.insert(Attribute::client_error(code));
        Self {
            method,
            subtype: subtype::CLIENT_ERROR,
            reserved: [0, 0],
            attributes,
        }
    }

    /// Method the type data belongs to
    pub fn method(&self) -> EapMethod {
        self.method
    }

    /// Subtype code
    pub fn subtype(&self) -> u8 {
        self.subtype
    }

    /// Subtype name from the method's table
    pub fn subtype_name(&self) -> &'static str {
        self.method.subtype_name(self.subtype).unwrap_or("Unknown")
    }

    /// Reserved bytes, exactly as received
    pub fn reserved(&self) -> [u8; 2] {
        self.reserved
    }

    /// Attributes in wire order
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Attribute of a known type
    pub fn get(&self, attribute_type: AttributeType) -> Option<&Attribute> {
        self.attributes.get(attribute_type)
    }

    /// Whether an attribute of a known type is present
    pub fn contains(&self, attribute_type: AttributeType) -> bool {
        self.attributes.contains(attribute_type)
    }

    /// Attributes in wire order
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether no attributes follow the header
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Decode received type data with `method`'s subtype table and factory.
    ///
    /// Never panics: every failure is logged and reported as the client error
    /// code the peer should answer with.
    pub fn decode(method: EapMethod, data: &[u8]) -> DecodeResult {
        Self::decode_optional(method, Some(data))
    }

    /// Like [`TypeData::decode`], treating absent type data as undecodable
    pub fn decode_optional(method: EapMethod, data: Option<&[u8]>) -> DecodeResult {
        let result = match data {
            Some(bytes) => Self::try_decode(method, bytes),
            None => Err(DecodeError::MissingData),
        };

        match result {
            Ok(type_data) => {
                if let Some(bytes) = data {
                    log_eap_message(method.name(), Direction::Rx, type_data.subtype_name(), bytes);
                }
                debug!(
                    method = %method,
                    subtype = type_data.subtype,
                    attributes = type_data.attributes.len(),
                    "Decoded type data"
                );
                Ok(type_data)
            }
            Err(err) => {
                let code = err.client_error_code(method);
                warn!(
                    method = %method,
                    error = %err,
                    client_error_code = u16::from(code),
                    "Failed to decode type data"
                );
                Err(code)
            }
        }
    }

    fn try_decode(method: EapMethod, bytes: &[u8]) -> Result<Self, DecodeError> {
        trace!(method = %method, hex = %HexDump(bytes), "Decoding type data");

        let mut buf = bytes;
        if buf.remaining() < TYPE_DATA_HEADER_LEN {
            return Err(DecodeError::BufferTooShort {
                expected: TYPE_DATA_HEADER_LEN,
                actual: buf.remaining(),
            });
        }

        let subtype = buf.get_u8();
        if !method.supports_subtype(subtype) {
            return Err(DecodeError::InvalidSubtype { method, subtype });
        }

        let mut reserved = [0u8; 2];
        buf.copy_to_slice(&mut reserved);

        let mut attributes = Attributes::new();
        while buf.has_remaining() {
            let attribute = Attribute::decode(&mut buf, method)?;
            attributes
                .insert(attribute)
                .map_err(|dup| DecodeError::DuplicateAttribute(dup.attribute_type()))?;
        }

        Ok(Self {
            method,
            subtype,
            reserved,
            attributes,
        })
    }

    /// Encoded length: header plus every attribute
    pub fn encoded_len(&self) -> usize {
        TYPE_DATA_HEADER_LEN + self.attributes.encoded_len()
    }

    /// Encode subtype, reserved bytes and attributes in order
    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.subtype);
        buf.put_slice(&self.reserved);
        for attribute in &self.attributes {
            attribute.encode(buf);
        }
    }

    /// Encode to a new `Vec<u8>`
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode(&mut buf);
        buf
    }

    /// Encoding with the AT_MAC value zeroed, the input to MAC computation
    pub fn encode_with_zeroed_mac(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        buf.put_u8(self.subtype);
        buf.put_slice(&self.reserved);
        for attribute in &self.attributes {
            match attribute {
                Attribute::Mac(_) => Attribute::Mac([0; MAC_LEN]).encode(&mut buf),
                other => other.encode(&mut buf),
            }
        }
        buf
    }
}
