//! Virtual fan — active flag and rotation speed.

use hapgate_domain::characteristic::{Characteristic, CharacteristicFormat};
use hapgate_domain::error::HubError;

use super::VirtualDevice;

/// Build the simulated fan. It has no room and lands in the default one.
///
/// # Errors
///
/// Returns a validation error if the builder fails.
pub fn fan() -> Result<VirtualDevice, HubError> {
    let active = Characteristic::builder()
        .iid(10)
        .type_name("Active")
        .format(CharacteristicFormat::Uint8)
        .value(0_u64)
        .range(0.0, 1.0)
        .writable(true)
        .build()?;
    let rotation_speed = Characteristic::builder()
        .iid(11)
        .type_name("RotationSpeed")
        .format(CharacteristicFormat::Float)
        .value(0.0)
        .unit("percentage")
        .range(0.0, 100.0)
        .writable(true)
        .build()?;

    VirtualDevice::new("Fan", None, "Fanv2", vec![active, rotation_speed])
}
