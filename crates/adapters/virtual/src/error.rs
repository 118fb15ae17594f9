//! Virtual adapter error types.

use hapgate_domain::error::HubError;
use hapgate_domain::id::AccessoryUniqueId;

/// Errors raised by the simulated accessories.
///
/// The core only addresses characteristics it has just enumerated, so these
/// indicate a stale or forged target and surface as upstream failures.
#[derive(Debug, thiserror::Error)]
pub enum VirtualError {
    #[error("no virtual accessory with id {0}")]
    UnknownAccessory(AccessoryUniqueId),

    #[error("accessory {unique_id} has no service {service_iid}")]
    UnknownService {
        unique_id: AccessoryUniqueId,
        service_iid: u32,
    },

    #[error("service {service_iid} has no characteristic {iid}")]
    UnknownCharacteristic { service_iid: u32, iid: u32 },

    #[error("characteristic {iid} is read-only")]
    ReadOnly { iid: u32 },
}

impl From<VirtualError> for HubError {
    fn from(err: VirtualError) -> Self {
        HubError::Upstream(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_read_only_error() {
        let err = VirtualError::ReadOnly { iid: 9 };
        assert_eq!(err.to_string(), "characteristic 9 is read-only");
    }

    #[test]
    fn should_convert_into_upstream_error() {
        let err: HubError = VirtualError::UnknownCharacteristic {
            service_iid: 8,
            iid: 42,
        }
        .into();
        assert!(matches!(err, HubError::Upstream(_)));
        assert_eq!(err.kind(), "upstream");
    }
}
