//! # hapgate-domain
//!
//! Pure domain model for the hapgate accessory gateway.
//!
//! ## Responsibilities
//! - Foundational types: accessory identifiers, error conventions, timestamps
//! - Define **Characteristics** (typed, format-tagged properties such as `On`
//!   or `TargetTemperature`) and their values
//! - Define **Services** (functional groupings of characteristics) and
//!   **Accessories** (devices exposing one or more services)
//! - Coerce untyped incoming values into a characteristic's declared format
//!   and enforce its bounds
//! - Derive the room layout view from a set of accessories
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod accessory;
pub mod characteristic;
pub mod coercion;
pub mod layout;
pub mod service;
