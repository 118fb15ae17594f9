//! Service — a functional grouping of characteristics (e.g. `Lightbulb`).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::characteristic::Characteristic;
use crate::error::{HubError, ValidationError};

/// Snapshot of one service on an accessory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    /// Instance id, unique within the accessory.
    pub iid: u32,
    pub service_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub characteristics: Vec<Characteristic>,
}

impl ServiceRecord {
    /// Create a new service after validating its characteristics.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Validation`] if the service type is empty, a
    /// characteristic is invalid, or two characteristics share a type name.
    pub fn new(
        iid: u32,
        service_type: impl Into<String>,
        name: Option<String>,
        characteristics: Vec<Characteristic>,
    ) -> Result<Self, HubError> {
        let service = Self {
            iid,
            service_type: service_type.into(),
            name,
            characteristics,
        };
        service.validate()?;
        Ok(service)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// See [`ServiceRecord::new`].
    pub fn validate(&self) -> Result<(), HubError> {
        if self.service_type.is_empty() {
            return Err(ValidationError::EmptyServiceType.into());
        }
        let mut seen = HashSet::with_capacity(self.characteristics.len());
        for characteristic in &self.characteristics {
            characteristic.validate()?;
            if !seen.insert(characteristic.type_name.as_str()) {
                return Err(
                    ValidationError::DuplicateCharacteristic(characteristic.type_name.clone())
                        .into(),
                );
            }
        }
        Ok(())
    }

    /// Look up a characteristic by exact, case-sensitive type name.
    #[must_use]
    pub fn characteristic(&self, type_name: &str) -> Option<&Characteristic> {
        self.characteristics
            .iter()
            .find(|c| c.type_name == type_name)
    }

    /// Type names of the characteristics that accept writes.
    pub fn writable_types(&self) -> impl Iterator<Item = &str> {
        self.characteristics
            .iter()
            .filter(|c| c.can_write)
            .map(|c| c.type_name.as_str())
    }
}
