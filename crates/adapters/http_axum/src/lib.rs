//! # hapgate-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **REST-ish JSON API** for accessories
//!   (`/accessories`, `/accessories/layout`, `/accessories/{uniqueId}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map [`HubError`](hapgate_domain::error::HubError) into status codes:
//!   caller errors are `400`, accessory client failures are `502`
//!
//! Authentication happens in front of this adapter and is not handled here.
//!
//! ## Dependency rule
//! Depends on `hapgate-app` (for port traits and services) and
//! `hapgate-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
