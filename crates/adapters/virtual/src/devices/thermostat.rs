//! Virtual thermostat — a temperature reading plus heating targets.

use hapgate_domain::characteristic::{Characteristic, CharacteristicFormat};
use hapgate_domain::error::HubError;

use super::VirtualDevice;

/// Build the simulated thermostat, idle with a 20 °C target.
///
/// # Errors
///
/// Returns a validation error if the builder fails.
pub fn thermostat() -> Result<VirtualDevice, HubError> {
    let current_temperature = Characteristic::builder()
        .iid(10)
        .type_name("CurrentTemperature")
        .format(CharacteristicFormat::Float)
        .value(19.5)
        .unit("celsius")
        .build()?;
    let target_temperature = Characteristic::builder()
        .iid(11)
        .type_name("TargetTemperature")
        .format(CharacteristicFormat::Float)
        .value(20.0)
        .unit("celsius")
        .range(18.0, 30.0)
        .min_step(0.5)
        .writable(true)
        .build()?;
    let target_state = Characteristic::builder()
        .iid(12)
        .type_name("TargetHeatingCoolingState")
        .description("0 off, 1 heat, 2 cool, 3 auto")
        .format(CharacteristicFormat::Uint8)
        .value(0_u64)
        .range(0.0, 3.0)
        .writable(true)
        .build()?;

    VirtualDevice::new(
        "Thermostat",
        Some("Hallway"),
        "Thermostat",
        vec![current_temperature, target_temperature, target_state],
    )
}
