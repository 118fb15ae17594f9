//! Characteristic writer — validate a proposed value, then write it.
//!
//! Every guard runs before the client sees anything: the access gate, the
//! accessory lookup, characteristic resolution and value coercion. Only the
//! final `set_value` call has a side effect, and accessory writes cannot be
//! undone.

use hapgate_domain::accessory::AccessoryRecord;
use hapgate_domain::error::{HubError, NotFoundError};
use hapgate_domain::id::AccessoryUniqueId;
use serde_json::Value;

use crate::ports::AccessoryClient;
use crate::services::access_gate::AccessGate;
use crate::services::accessory_directory::AccessoryDirectory;
use crate::services::characteristic_resolver;

/// A validated request to set one characteristic.
#[derive(Debug, Clone, PartialEq)]
pub struct SetCharacteristic {
    pub characteristic_type: String,
    pub value: Value,
}

impl SetCharacteristic {
    /// Check that both required fields are present.
    ///
    /// A JSON `null` value counts as missing.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::MissingField`] for `characteristicType` first,
    /// then for `value`.
    pub fn new(
        characteristic_type: Option<String>,
        value: Option<Value>,
    ) -> Result<Self, HubError> {
        let characteristic_type =
            characteristic_type.ok_or(NotFoundError::MissingField("characteristicType"))?;
        let value = value
            .filter(|v| !v.is_null())
            .ok_or(NotFoundError::MissingField("value"))?;
        Ok(Self {
            characteristic_type,
            value,
        })
    }
}

/// Application service that performs guarded characteristic writes.
pub struct CharacteristicWriter<C> {
    directory: AccessoryDirectory<C>,
    gate: AccessGate,
}

impl<C: AccessoryClient> CharacteristicWriter<C> {
    /// Create a writer sharing the directory's client.
    pub fn new(directory: AccessoryDirectory<C>, gate: AccessGate) -> Self {
        Self { directory, gate }
    }

    /// Write `command.value` to the characteristic named by
    /// `command.characteristic_type` on the accessory `unique_id`.
    ///
    /// Returns the accessory with the written service refreshed. If that
    /// refresh fails the write has still happened, so the pre-write snapshot
    /// is returned instead of an error.
    ///
    /// # Errors
    ///
    /// In order of evaluation:
    /// - [`HubError::AccessDenied`] when insecure mode is disabled,
    /// - [`HubError::NotFound`] when the accessory or characteristic is unknown,
    /// - [`HubError::Coercion`] when the value has the wrong type or is out of range,
    /// - [`HubError::Upstream`] when the client fails to enumerate or write.
    #[tracing::instrument(
        skip(self, command),
        fields(characteristic_type = %command.characteristic_type)
    )]
    pub async fn write(
        &self,
        unique_id: &AccessoryUniqueId,
        command: &SetCharacteristic,
    ) -> Result<AccessoryRecord, HubError> {
        self.gate.check()?;

        let accessory = self.directory.find_by_unique_id(unique_id).await?;
        let resolved = characteristic_resolver::resolve(&accessory, &command.characteristic_type)?;
        let value = resolved.characteristic.coerce(&command.value)?;
        let target = resolved.target(&accessory);

        tracing::debug!(iid = target.iid, ?value, "writing characteristic");
        self.directory.client().set_value(&target, value).await?;

        match self
            .directory
            .refresh_service(accessory.clone(), target.service_iid)
            .await
        {
            Ok(refreshed) => Ok(refreshed),
            Err(err) => {
                tracing::warn!(error = %err, "refresh after write failed, returning previous snapshot");
                Ok(accessory)
            }
        }
    }
}
