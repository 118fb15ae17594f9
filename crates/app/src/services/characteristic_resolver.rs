//! Characteristic resolution — find the write target on an accessory.

use hapgate_domain::accessory::AccessoryRecord;
use hapgate_domain::characteristic::Characteristic;
use hapgate_domain::error::{HubError, NotFoundError};
use hapgate_domain::service::ServiceRecord;

use crate::ports::CharacteristicTarget;

/// A characteristic together with the service that owns it.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedCharacteristic<'a> {
    pub service: &'a ServiceRecord,
    pub characteristic: &'a Characteristic,
}

impl ResolvedCharacteristic<'_> {
    /// Address of this characteristic on `accessory` for the client.
    #[must_use]
    pub fn target(&self, accessory: &AccessoryRecord) -> CharacteristicTarget {
        CharacteristicTarget::new(&accessory.unique_id, self.service, self.characteristic)
    }
}

/// Resolve a writable characteristic by exact type name.
///
/// Read-only characteristics are never write targets and resolve the same way
/// as unknown ones.
///
/// # Errors
///
/// Returns [`NotFoundError::Characteristic`] (listing the writable types)
/// when `type_name` is empty, unknown, or read-only.
pub fn resolve<'a>(
    accessory: &'a AccessoryRecord,
    type_name: &str,
) -> Result<ResolvedCharacteristic<'a>, HubError> {
    let found = if type_name.is_empty() {
        None
    } else {
        accessory.characteristic(type_name)
    };

    match found {
        Some((service, characteristic)) if characteristic.can_write => {
            Ok(ResolvedCharacteristic {
                service,
                characteristic,
            })
        }
        _ => Err(NotFoundError::Characteristic {
            type_name: type_name.to_string(),
            writable: accessory.writable_types(),
        }
        .into()),
    }
}
