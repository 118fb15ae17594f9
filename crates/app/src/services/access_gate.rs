//! Access gate — the single insecure-mode check.
//!
//! Raw characteristic listings and every write require insecure mode. The
//! flag is a value carried in application state rather than a global, so
//! each call sees exactly the configuration it was built with.

use hapgate_domain::error::{AccessDeniedError, HubError};

/// Whether raw characteristic access is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessGate {
    insecure_mode: bool,
}

impl AccessGate {
    #[must_use]
    pub fn new(insecure_mode: bool) -> Self {
        Self { insecure_mode }
    }

    #[must_use]
    pub fn allow_raw_access(&self) -> bool {
        self.insecure_mode
    }

    /// Fail when raw access is not permitted.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::AccessDenied`] when insecure mode is disabled.
    pub fn check(&self) -> Result<(), HubError> {
        if self.insecure_mode {
            Ok(())
        } else {
            Err(AccessDeniedError.into())
        }
    }
}
