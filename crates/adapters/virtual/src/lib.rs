//! # hapgate-adapter-virtual
//!
//! In-process [`AccessoryClient`] backed by simulated accessories, used by
//! the daemon's demo mode and by end-to-end tests.
//!
//! ## Provided accessories
//!
//! | Accessory | Room | Writable characteristics |
//! |-----------|------|--------------------------|
//! | Lightbulb | Living Room | `On` (bool), `Brightness` (uint8 0–100) |
//! | Thermostat | Hallway | `TargetTemperature` (float 18–30), `TargetHeatingCoolingState` (uint8 0–3) |
//! | Fan | — | `Active` (uint8 0–1), `RotationSpeed` (float 0–100) |
//!
//! Every accessory also carries a read-only `Name`; the thermostat a
//! read-only `CurrentTemperature`.
//!
//! ## Dependency rule
//!
//! Depends on `hapgate-app` (port traits) and `hapgate-domain` only.

mod devices;
pub mod error;

use hapgate_app::ports::{AccessoryClient, CharacteristicTarget, DiscoveredService};
use hapgate_domain::characteristic::CharacteristicValue;
use hapgate_domain::error::HubError;
use hapgate_domain::id::AccessoryUniqueId;
use hapgate_domain::service::ServiceRecord;

use devices::VirtualDevice;
use error::VirtualError;

/// Accessory client that serves the simulated accessories.
#[derive(Debug)]
pub struct VirtualAccessoryClient {
    devices: Vec<VirtualDevice>,
}

impl VirtualAccessoryClient {
    /// Create the lightbulb, thermostat and fan in their initial state.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Validation`] if a simulated accessory is malformed.
    pub fn new() -> Result<Self, HubError> {
        Ok(Self {
            devices: vec![
                devices::lightbulb()?,
                devices::thermostat()?,
                devices::fan()?,
            ],
        })
    }

    fn device(&self, unique_id: &AccessoryUniqueId) -> Result<&VirtualDevice, VirtualError> {
        self.devices
            .iter()
            .find(|d| d.unique_id() == unique_id)
            .ok_or_else(|| VirtualError::UnknownAccessory(unique_id.clone()))
    }
}

impl AccessoryClient for VirtualAccessoryClient {
    async fn get_all_services(&self) -> Result<Vec<DiscoveredService>, HubError> {
        self.devices.iter().map(VirtualDevice::discover).collect()
    }

    async fn refresh_characteristics(
        &self,
        unique_id: &AccessoryUniqueId,
        service: &ServiceRecord,
    ) -> Result<ServiceRecord, HubError> {
        let device = self.device(unique_id)?;
        let current = device.service()?;
        if current.iid != service.iid {
            return Err(VirtualError::UnknownService {
                unique_id: unique_id.clone(),
                service_iid: service.iid,
            }
            .into());
        }
        Ok(current)
    }

    async fn set_value(
        &self,
        target: &CharacteristicTarget,
        value: CharacteristicValue,
    ) -> Result<(), HubError> {
        tracing::info!(
            unique_id = %target.unique_id,
            characteristic = %target.type_name,
            ?value,
            "virtual accessory updated"
        );
        self.device(&target.unique_id)?
            .write(target.service_iid, target.iid, value)?;
        Ok(())
    }
}
