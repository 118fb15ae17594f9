//! Virtual lightbulb — on/off with dimmable brightness.

use hapgate_domain::characteristic::{Characteristic, CharacteristicFormat};
use hapgate_domain::error::HubError;

use super::VirtualDevice;

/// Build the simulated lightbulb, switched off at full brightness.
///
/// # Errors
///
/// Returns a validation error if the builder fails (should not happen with
/// hardcoded inputs).
pub fn lightbulb() -> Result<VirtualDevice, HubError> {
    let on = Characteristic::builder()
        .iid(10)
        .type_name("On")
        .format(CharacteristicFormat::Bool)
        .value(false)
        .writable(true)
        .build()?;
    let brightness = Characteristic::builder()
        .iid(11)
        .type_name("Brightness")
        .format(CharacteristicFormat::Uint8)
        .value(100_u64)
        .unit("percentage")
        .range(0.0, 100.0)
        .min_step(1.0)
        .writable(true)
        .build()?;

    VirtualDevice::new(
        "Lightbulb",
        Some("Living Room"),
        "Lightbulb",
        vec![on, brightness],
    )
}
