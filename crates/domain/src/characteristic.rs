//! Characteristic — a single readable/controllable property of a service.
//!
//! A characteristic declares a primitive [`CharacteristicFormat`], optional
//! numeric bounds, and whether it may be written. Incoming values are turned
//! into a [`CharacteristicValue`] by [`Characteristic::coerce`].

mod format;
mod value;

pub use format::CharacteristicFormat;
pub use value::CharacteristicValue;

use serde::{Deserialize, Serialize};

use crate::error::{CoercionError, HubError, ValidationError};

/// Snapshot of one characteristic as reported by the accessory client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Characteristic {
    /// Instance id, unique within the accessory.
    pub iid: u32,
    /// Type name used for lookups (e.g. `On`, `TargetTemperature`).
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub format: CharacteristicFormat,
    /// Last known live value.
    pub value: Option<CharacteristicValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_step: Option<f64>,
    pub can_read: bool,
    pub can_write: bool,
}

impl Characteristic {
    /// Create a builder for constructing a [`Characteristic`].
    #[must_use]
    pub fn builder() -> CharacteristicBuilder {
        CharacteristicBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Validation`] when the type name is empty or
    /// `minValue` is greater than `maxValue`.
    pub fn validate(&self) -> Result<(), HubError> {
        if self.type_name.is_empty() {
            return Err(ValidationError::EmptyCharacteristicType.into());
        }
        if let (Some(min), Some(max)) = (self.min_value, self.max_value)
            && min > max
        {
            return Err(ValidationError::InvertedBounds {
                type_name: self.type_name.clone(),
                min,
                max,
            }
            .into());
        }
        Ok(())
    }

    /// Coerce an untyped incoming value into this characteristic's format.
    ///
    /// Pure: nothing is written. See [`crate::coercion`] for the rules.
    ///
    /// # Errors
    ///
    /// Returns [`CoercionError::InvalidType`] when the value cannot be parsed
    /// into the format, and [`CoercionError::OutOfRange`] when it parses but
    /// violates the declared bounds.
    pub fn coerce(&self, raw: &serde_json::Value) -> Result<CharacteristicValue, CoercionError> {
        crate::coercion::coerce(self, raw)
    }
}

/// Step-by-step builder for [`Characteristic`].
#[derive(Debug)]
pub struct CharacteristicBuilder {
    iid: u32,
    type_name: Option<String>,
    description: Option<String>,
    format: CharacteristicFormat,
    value: Option<CharacteristicValue>,
    unit: Option<String>,
    min_value: Option<f64>,
    max_value: Option<f64>,
    min_step: Option<f64>,
    can_read: bool,
    can_write: bool,
}

impl Default for CharacteristicBuilder {
    fn default() -> Self {
        Self {
            iid: 0,
            type_name: None,
            description: None,
            format: CharacteristicFormat::String,
            value: None,
            unit: None,
            min_value: None,
            max_value: None,
            min_step: None,
            can_read: true,
            can_write: false,
        }
    }
}

impl CharacteristicBuilder {
    #[must_use]
    pub fn iid(mut self, iid: u32) -> Self {
        self.iid = iid;
        self
    }

    #[must_use]
    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn format(mut self, format: CharacteristicFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<CharacteristicValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set both bounds at once.
    #[must_use]
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    #[must_use]
    pub fn min_step(mut self, min_step: f64) -> Self {
        self.min_step = Some(min_step);
        self
    }

    #[must_use]
    pub fn writable(mut self, can_write: bool) -> Self {
        self.can_write = can_write;
        self
    }

    #[must_use]
    pub fn readable(mut self, can_read: bool) -> Self {
        self.can_read = can_read;
        self
    }

    /// Consume the builder, validate, and return a [`Characteristic`].
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Validation`] if the type name is missing or the
    /// bounds are inverted.
    pub fn build(self) -> Result<Characteristic, HubError> {
        let characteristic = Characteristic {
            iid: self.iid,
            type_name: self.type_name.unwrap_or_default(),
            description: self.description,
            format: self.format,
            value: self.value,
            unit: self.unit,
            min_value: self.min_value,
            max_value: self.max_value,
            min_step: self.min_step,
            can_read: self.can_read,
            can_write: self.can_write,
        };
        characteristic.validate()?;
        Ok(characteristic)
    }
}
