//! Accessory client port — the bridge to whatever actually talks to devices.
//!
//! The core never caches what the client returns: every listing or write
//! starts with a fresh [`AccessoryClient::get_all_services`] call.

use std::future::Future;

use hapgate_domain::characteristic::{Characteristic, CharacteristicValue};
use hapgate_domain::error::HubError;
use hapgate_domain::id::AccessoryUniqueId;
use hapgate_domain::service::ServiceRecord;

/// A service as reported by the client, tagged with its owning accessory.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredService {
    pub unique_id: AccessoryUniqueId,
    pub accessory_name: String,
    pub room: Option<String>,
    pub service: ServiceRecord,
}

/// Address of a single characteristic instance for a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacteristicTarget {
    pub unique_id: AccessoryUniqueId,
    pub service_iid: u32,
    pub iid: u32,
    pub type_name: String,
}

impl CharacteristicTarget {
    /// Build the address of `characteristic` inside `service`.
    #[must_use]
    pub fn new(
        unique_id: &AccessoryUniqueId,
        service: &ServiceRecord,
        characteristic: &Characteristic,
    ) -> Self {
        Self {
            unique_id: unique_id.clone(),
            service_iid: service.iid,
            iid: characteristic.iid,
            type_name: characteristic.type_name.clone(),
        }
    }
}

/// Client that enumerates accessories and performs characteristic I/O.
///
/// Implementations live in adapter crates (e.g. `hapgate-adapter-virtual`). Failures
/// of the underlying transport are reported as [`HubError::Upstream`].
pub trait AccessoryClient: Send + Sync {
    /// Enumerate every service of every accessory, in a stable order.
    fn get_all_services(
        &self,
    ) -> impl Future<Output = Result<Vec<DiscoveredService>, HubError>> + Send;

    /// Re-read the live values of a service's characteristics.
    fn refresh_characteristics(
        &self,
        unique_id: &AccessoryUniqueId,
        service: &ServiceRecord,
    ) -> impl Future<Output = Result<ServiceRecord, HubError>> + Send;

    /// Write an already-coerced value to a characteristic.
    ///
    /// Once dispatched the write is not rolled back, even if the caller
    /// goes away.
    fn set_value(
        &self,
        target: &CharacteristicTarget,
        value: CharacteristicValue,
    ) -> impl Future<Output = Result<(), HubError>> + Send;
}
