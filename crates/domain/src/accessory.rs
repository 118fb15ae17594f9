//! Accessory — a physical or virtual device exposing one or more services.
//!
//! Records are snapshots: they are rebuilt from the accessory client on every
//! query and never updated in place.

use serde::{Deserialize, Serialize};

use crate::characteristic::{Characteristic, CharacteristicFormat, CharacteristicValue};
use crate::id::AccessoryUniqueId;
use crate::service::ServiceRecord;
use crate::time::Timestamp;

/// Snapshot of one accessory and its services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryRecord {
    pub unique_id: AccessoryUniqueId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    pub services: Vec<ServiceRecord>,
    /// When the snapshot was taken from the accessory client.
    pub fetched_at: Timestamp,
}

impl AccessoryRecord {
    /// Find the first characteristic with `type_name`, searching services in
    /// order, together with the service that owns it.
    #[must_use]
    pub fn characteristic(&self, type_name: &str) -> Option<(&ServiceRecord, &Characteristic)> {
        self.services
            .iter()
            .find_map(|service| service.characteristic(type_name).map(|c| (service, c)))
    }

    /// Type names of every writable characteristic, in service order.
    #[must_use]
    pub fn writable_types(&self) -> Vec<String> {
        self.services
            .iter()
            .flat_map(ServiceRecord::writable_types)
            .map(str::to_string)
            .collect()
    }

    /// Flatten all characteristics into summaries, in service order.
    #[must_use]
    pub fn summaries(&self) -> Vec<CharacteristicSummary> {
        self.services
            .iter()
            .flat_map(|service| {
                service
                    .characteristics
                    .iter()
                    .map(|c| CharacteristicSummary::new(service, c))
            })
            .collect()
    }

    /// Replace the service with the same `iid`, keeping order.
    #[must_use]
    pub fn with_service(mut self, service: ServiceRecord) -> Self {
        if let Some(slot) = self.services.iter_mut().find(|s| s.iid == service.iid) {
            *slot = service;
        }
        self
    }
}

/// Flattened view of a single characteristic for listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicSummary {
    pub service_type: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub format: CharacteristicFormat,
    pub value: Option<CharacteristicValue>,
    pub can_write: bool,
}

impl CharacteristicSummary {
    fn new(service: &ServiceRecord, characteristic: &Characteristic) -> Self {
        Self {
            service_type: service.service_type.clone(),
            type_name: characteristic.type_name.clone(),
            format: characteristic.format,
            value: characteristic.value.clone(),
            can_write: characteristic.can_write,
        }
    }
}

/// An accessory together with its flattened characteristic summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryListing {
    #[serde(flatten)]
    pub accessory: AccessoryRecord,
    pub values: Vec<CharacteristicSummary>,
}

impl From<AccessoryRecord> for AccessoryListing {
    fn from(accessory: AccessoryRecord) -> Self {
        let values = accessory.summaries();
        Self { accessory, values }
    }
}
