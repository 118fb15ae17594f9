//! Typed characteristic values.

use serde::{Deserialize, Serialize};

/// A characteristic value in its declared representation.
///
/// Serialized as a plain JSON scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CharacteristicValue {
    Bool(bool),
    UInt(u64),
    Int(i64),
    Float(f64),
    String(String),
}

impl From<bool> for CharacteristicValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u64> for CharacteristicValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for CharacteristicValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for CharacteristicValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_unsigned_as_plain_number() {
        let json = serde_json::to_string(&CharacteristicValue::UInt(1)).unwrap();
        assert_eq!(json, "1");
    }

    #[test]
    fn should_serialize_float_as_plain_number() {
        let json = serde_json::to_string(&CharacteristicValue::Float(22.5)).unwrap();
        assert_eq!(json, "22.5");
    }

    #[test]
    fn should_deserialize_positive_integer_as_unsigned() {
        let value: CharacteristicValue = serde_json::from_str("3").unwrap();
        assert_eq!(value, CharacteristicValue::UInt(3));
    }

    #[test]
    fn should_deserialize_negative_integer_as_signed() {
        let value: CharacteristicValue = serde_json::from_str("-3").unwrap();
        assert_eq!(value, CharacteristicValue::Int(-3));
    }
}
