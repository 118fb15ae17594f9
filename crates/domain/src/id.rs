//! Accessory identifiers.
//!
//! Accessories are addressed by an opaque, content-derived unique id that
//! stays stable across restarts of the integration that exposes them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Namespace for ids derived with [`AccessoryUniqueId::derive`].
const NAMESPACE: uuid::Uuid = uuid::Uuid::from_u128(0x6a1f_3c2e_9b8d_4e57_a0c4_1d2b_7f63_e915);

/// Unique identifier of an [`AccessoryRecord`](crate::accessory::AccessoryRecord).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccessoryUniqueId(String);

impl AccessoryUniqueId {
    /// Wrap an existing identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyUniqueId`] when `value` is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyUniqueId);
        }
        Ok(Self(value))
    }

    /// Derive a stable identifier from content parts.
    ///
    /// The same parts always produce the same id.
    #[must_use]
    pub fn derive(parts: &[&str]) -> Self {
        let name = parts.join("\u{1f}");
        let uuid = uuid::Uuid::new_v5(&NAMESPACE, name.as_bytes());
        Self(uuid.simple().to_string())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessoryUniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccessoryUniqueId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AccessoryUniqueId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccessoryUniqueId> for String {
    fn from(id: AccessoryUniqueId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_derive_same_id_from_same_parts() {
        let a = AccessoryUniqueId::derive(&["virtual", "Living Room Light"]);
        let b = AccessoryUniqueId::derive(&["virtual", "Living Room Light"]);
        assert_eq!(a, b);
    }

    #[test]
    fn should_derive_different_ids_from_different_parts() {
        let a = AccessoryUniqueId::derive(&["virtual", "Light"]);
        let b = AccessoryUniqueId::derive(&["virtual", "Fan"]);
        assert_ne!(a, b);
    }

    #[test]
    fn should_not_collide_when_parts_are_split_differently() {
        let a = AccessoryUniqueId::derive(&["ab", "c"]);
        let b = AccessoryUniqueId::derive(&["a", "bc"]);
        assert_ne!(a, b);
    }

    #[test]
    fn should_render_derived_id_as_lowercase_hex() {
        let id = AccessoryUniqueId::derive(&["virtual", "Thermostat"]);
        assert_eq!(id.as_str().len(), 32);
        assert!(
            id.as_str()
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        );
    }

    #[test]
    fn should_return_error_when_parsing_empty_string() {
        let result = AccessoryUniqueId::from_str("");
        assert_eq!(result, Err(ValidationError::EmptyUniqueId));
    }

    #[test]
    fn should_accept_opaque_strings() {
        let id: AccessoryUniqueId = "xxxx".parse().unwrap();
        assert_eq!(id.to_string(), "xxxx");
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let id = AccessoryUniqueId::new("c8964091efa5").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"c8964091efa5\"");
    }

    #[test]
    fn should_reject_empty_string_when_deserializing() {
        let result: Result<AccessoryUniqueId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
