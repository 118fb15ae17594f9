//! Simulated accessories — lightbulb, thermostat, fan.
//!
//! Each accessory exposes a single service whose characteristics live behind
//! a mutex. Unique ids are derived from the accessory name so they remain
//! stable across restarts.

mod fan;
mod light;
mod thermostat;

pub use fan::fan;
pub use light::lightbulb;
pub use thermostat::thermostat;

use std::sync::{Mutex, MutexGuard, PoisonError};

use hapgate_app::ports::DiscoveredService;
use hapgate_domain::characteristic::{Characteristic, CharacteristicFormat, CharacteristicValue};
use hapgate_domain::error::HubError;
use hapgate_domain::id::AccessoryUniqueId;
use hapgate_domain::service::ServiceRecord;

use crate::error::VirtualError;

/// Instance id of the single service every virtual accessory exposes.
pub const SERVICE_IID: u32 = 8;
/// Instance id of the read-only `Name` characteristic.
const NAME_IID: u32 = 9;

/// One simulated accessory.
#[derive(Debug)]
pub struct VirtualDevice {
    unique_id: AccessoryUniqueId,
    name: &'static str,
    room: Option<&'static str>,
    service_type: &'static str,
    characteristics: Mutex<Vec<Characteristic>>,
}

impl VirtualDevice {
    /// Create an accessory with the given controls, prefixed by a read-only
    /// `Name` characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Validation`] if the characteristics don't form a
    /// valid service.
    pub fn new(
        name: &'static str,
        room: Option<&'static str>,
        service_type: &'static str,
        controls: Vec<Characteristic>,
    ) -> Result<Self, HubError> {
        let name_characteristic = Characteristic::builder()
            .iid(NAME_IID)
            .type_name("Name")
            .format(CharacteristicFormat::String)
            .value(name)
            .build()?;

        let mut characteristics = Vec::with_capacity(controls.len() + 1);
        characteristics.push(name_characteristic);
        characteristics.extend(controls);

        let device = Self {
            unique_id: AccessoryUniqueId::derive(&["virtual", name]),
            name,
            room,
            service_type,
            characteristics: Mutex::new(characteristics),
        };
        device.service()?;
        Ok(device)
    }

    #[must_use]
    pub fn unique_id(&self) -> &AccessoryUniqueId {
        &self.unique_id
    }

    /// Current snapshot of the accessory's service.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Validation`] if the service is malformed.
    pub fn service(&self) -> Result<ServiceRecord, HubError> {
        ServiceRecord::new(
            SERVICE_IID,
            self.service_type,
            Some(self.name.to_string()),
            self.lock().clone(),
        )
    }

    /// Describe the accessory the way a bridge would report it.
    ///
    /// # Errors
    ///
    /// See [`VirtualDevice::service`].
    pub fn discover(&self) -> Result<DiscoveredService, HubError> {
        Ok(DiscoveredService {
            unique_id: self.unique_id.clone(),
            accessory_name: self.name.to_string(),
            room: self.room.map(str::to_string),
            service: self.service()?,
        })
    }

    /// Store `value` into the characteristic `iid` of service `service_iid`.
    ///
    /// # Errors
    ///
    /// Returns a [`VirtualError`] when the service or characteristic does
    /// not exist or is read-only.
    pub fn write(
        &self,
        service_iid: u32,
        iid: u32,
        value: CharacteristicValue,
    ) -> Result<(), VirtualError> {
        if service_iid != SERVICE_IID {
            return Err(VirtualError::UnknownService {
                unique_id: self.unique_id.clone(),
                service_iid,
            });
        }
        let mut characteristics = self.lock();
        let characteristic = characteristics
            .iter_mut()
            .find(|c| c.iid == iid)
            .ok_or(VirtualError::UnknownCharacteristic { service_iid, iid })?;
        if !characteristic.can_write {
            return Err(VirtualError::ReadOnly { iid });
        }
        characteristic.value = Some(value);
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Characteristic>> {
        self.characteristics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
