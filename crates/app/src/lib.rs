//! # hapgate-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven port** adapters must implement:
//!   - `AccessoryClient` — enumerate services, refresh characteristics,
//!     write values
//! - Define **driving/inbound** use-cases:
//!   - `AccessoryDirectory` — list accessories, look one up, derive the layout
//!   - `characteristic_resolver` — find the write target on an accessory
//!   - `CharacteristicWriter` — gate, resolve, coerce, then write
//!   - `AccessGate` — the insecure-mode check
//!
//! ## Dependency rule
//! Depends on `hapgate-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;
