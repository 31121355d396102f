//! Ordered attribute container

use super::types::AttributeType;
use super::value::Attribute;

/// Attributes of one type-data envelope.
///
/// Keyed by attribute type code, kept in the order they were received or
/// supplied. A type code appears at most once; [`Attributes::insert`] refuses
/// a second one instead of overwriting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<Attribute>,
}

impl Attributes {
    /// Create a new empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `attribute`, handing it back if its type is already present
    pub(crate) fn insert(&mut self, attribute: Attribute) -> Result<(), Attribute> {
        if self.contains_raw(attribute.attribute_type()) {
            return Err(attribute);
        }
        self.entries.push(attribute);
        Ok(())
    }

    /// Attribute of a known type
    pub fn get(&self, attribute_type: AttributeType) -> Option<&Attribute> {
        self.get_raw(attribute_type.into())
    }

    /// Attribute by wire type code, including retained unsupported ones
    pub fn get_raw(&self, attribute_type: u8) -> Option<&Attribute> {
        self.entries
            .iter()
            .find(|a| a.attribute_type() == attribute_type)
    }

    /// Whether an attribute of a known type is present
    pub fn contains(&self, attribute_type: AttributeType) -> bool {
        self.contains_raw(attribute_type.into())
    }

    /// Whether an attribute with this wire type code is present
    pub fn contains_raw(&self, attribute_type: u8) -> bool {
        self.get_raw(attribute_type).is_some()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.entries.iter()
    }

    /// Attribute type codes in insertion order
    pub fn type_codes(&self) -> Vec<u8> {
        self.entries.iter().map(Attribute::attribute_type).collect()
    }

    /// Retained skippable attributes the method did not implement
    pub fn unsupported(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.iter().filter(|a| a.is_unsupported())
    }

    /// Sum of the attributes' encoded lengths
    pub fn encoded_len(&self) -> usize {
        self.entries.iter().map(Attribute::encoded_len).sum()
    }

    /// Check if the container is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
