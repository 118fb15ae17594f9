//! Application services — use-case implementations.
//!
//! Services accept the accessory client via a generic parameter
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod access_gate;
pub mod accessory_directory;
pub mod characteristic_resolver;
pub mod characteristic_writer;
