//! In-memory [`AccessoryClient`] double shared by the service tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use hapgate_domain::characteristic::{Characteristic, CharacteristicFormat, CharacteristicValue};
use hapgate_domain::error::HubError;
use hapgate_domain::id::AccessoryUniqueId;
use hapgate_domain::service::ServiceRecord;

use crate::ports::{AccessoryClient, CharacteristicTarget, DiscoveredService};

pub const UNIQUE_ID: &str = "c8964091efa500870e34996208e670cf7dc362d244e0410220752459a5e78d1c";

/// Records every call so tests can assert what reached the client.
pub struct RecordingClient {
    services: Mutex<Vec<DiscoveredService>>,
    pub list_calls: AtomicUsize,
    pub refresh_calls: AtomicUsize,
    pub writes: Mutex<Vec<(CharacteristicTarget, CharacteristicValue)>>,
    pub fail_writes: AtomicBool,
    pub fail_refresh: AtomicBool,
}

impl RecordingClient {
    pub fn new(services: Vec<DiscoveredService>) -> Self {
        Self {
            services: Mutex::new(services),
            list_calls: AtomicUsize::new(0),
            refresh_calls: AtomicUsize::new(0),
            writes: Mutex::new(Vec::new()),
            fail_writes: AtomicBool::new(false),
            fail_refresh: AtomicBool::new(false),
        }
    }

    pub fn written(&self) -> Vec<CharacteristicValue> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .map(|(_, v)| v.clone())
            .collect()
    }
}

impl Default for RecordingClient {
    fn default() -> Self {
        Self::new(vec![thermostat_service()])
    }
}

impl AccessoryClient for RecordingClient {
    async fn get_all_services(&self) -> Result<Vec<DiscoveredService>, HubError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.services.lock().unwrap().clone())
    }

    async fn refresh_characteristics(
        &self,
        unique_id: &AccessoryUniqueId,
        service: &ServiceRecord,
    ) -> Result<ServiceRecord, HubError> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_refresh.load(Ordering::SeqCst) {
            return Err(HubError::Upstream("refresh timed out".into()));
        }
        let services = self.services.lock().unwrap();
        Ok(services
            .iter()
            .find(|d| &d.unique_id == unique_id && d.service.iid == service.iid)
            .map_or_else(|| service.clone(), |d| d.service.clone()))
    }

    async fn set_value(
        &self,
        target: &CharacteristicTarget,
        value: CharacteristicValue,
    ) -> Result<(), HubError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(HubError::Upstream("device unreachable".into()));
        }
        self.writes
            .lock()
            .unwrap()
            .push((target.clone(), value.clone()));

        let mut services = self.services.lock().unwrap();
        let slot = services
            .iter_mut()
            .filter(|d| d.unique_id == target.unique_id && d.service.iid == target.service_iid)
            .flat_map(|d| d.service.characteristics.iter_mut())
            .find(|c| c.iid == target.iid);
        if let Some(c) = slot {
            c.value = Some(value);
        }
        Ok(())
    }
}

/// One accessory with a boolean, an integer and a float characteristic,
/// plus a read-only reading.
pub fn thermostat_service() -> DiscoveredService {
    let on = Characteristic::builder()
        .iid(9)
        .type_name("On")
        .format(CharacteristicFormat::Bool)
        .value(true)
        .writable(true)
        .build()
        .unwrap();
    let active = Characteristic::builder()
        .iid(10)
        .type_name("Active")
        .format(CharacteristicFormat::Uint8)
        .value(1_u64)
        .range(0.0, 1.0)
        .writable(true)
        .build()
        .unwrap();
    let target_temperature = Characteristic::builder()
        .iid(11)
        .type_name("TargetTemperature")
        .format(CharacteristicFormat::Float)
        .value(20.0)
        .range(18.0, 100.0)
        .writable(true)
        .build()
        .unwrap();
    let current_temperature = Characteristic::builder()
        .iid(12)
        .type_name("CurrentTemperature")
        .format(CharacteristicFormat::Float)
        .value(19.5)
        .build()
        .unwrap();

    DiscoveredService {
        unique_id: AccessoryUniqueId::new(UNIQUE_ID).unwrap(),
        accessory_name: "Thermostat".to_string(),
        room: Some("Hallway".to_string()),
        service: ServiceRecord::new(
            8,
            "Thermostat",
            None,
            vec![on, active, target_temperature, current_temperature],
        )
        .unwrap(),
    }
}

/// A second service for the same accessory id, to exercise grouping.
pub fn information_service(unique_id: &str) -> DiscoveredService {
    let identify = Characteristic::builder()
        .iid(2)
        .type_name("Identify")
        .format(CharacteristicFormat::Bool)
        .writable(true)
        .readable(false)
        .build()
        .unwrap();

    DiscoveredService {
        unique_id: AccessoryUniqueId::new(unique_id).unwrap(),
        accessory_name: unique_id.to_string(),
        room: None,
        service: ServiceRecord::new(1, "AccessoryInformation", None, vec![identify]).unwrap(),
    }
}
