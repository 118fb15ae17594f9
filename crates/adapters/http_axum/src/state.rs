//! Shared application state for axum handlers.

use std::sync::Arc;

use hapgate_app::ports::AccessoryClient;
use hapgate_app::services::access_gate::AccessGate;
use hapgate_app::services::accessory_directory::AccessoryDirectory;
use hapgate_app::services::characteristic_writer::CharacteristicWriter;

/// Application state shared across all axum handlers.
///
/// Generic over the accessory client to avoid dynamic dispatch.
/// `Clone` is implemented manually so the client itself does not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<C> {
    /// Accessory listings and lookups.
    pub directory: Arc<AccessoryDirectory<C>>,
    /// Guarded characteristic writes.
    pub writer: Arc<CharacteristicWriter<C>>,
    /// Insecure-mode gate for raw reads.
    pub gate: AccessGate,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
            writer: Arc::clone(&self.writer),
            gate: self.gate,
        }
    }
}

impl<C> AppState<C>
where
    C: AccessoryClient + 'static,
{
    /// Create the state, wiring directory and writer to the same client.
    pub fn new(client: Arc<C>, gate: AccessGate) -> Self {
        let directory = AccessoryDirectory::new(client);
        let writer = CharacteristicWriter::new(directory.clone(), gate);
        Self {
            directory: Arc::new(directory),
            writer: Arc::new(writer),
            gate,
        }
    }
}
