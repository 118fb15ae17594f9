//! Common error types used across the workspace.
//!
//! Each failure family has its own typed error, and [`HubError`] wraps them
//! via `#[from]` so the application layer can propagate with `?`.

use crate::characteristic::CharacteristicFormat;
use crate::id::AccessoryUniqueId;

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("rejected value")]
    Coercion(#[from] CoercionError),

    #[error("access denied")]
    AccessDenied(#[from] AccessDeniedError),

    /// The accessory client failed (device unreachable, transport error, …).
    #[error("accessory client error")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl HubError {
    /// Stable label for structured logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::Coercion(CoercionError::InvalidType { .. }) => "invalid_type",
            Self::Coercion(CoercionError::OutOfRange { .. }) => "out_of_range",
            Self::AccessDenied(_) => "access_denied",
            Self::Upstream(_) => "upstream",
        }
    }

    /// Whether the caller is responsible for the failure.
    ///
    /// Caller errors are never retried and surface as client errors.
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, Self::Upstream(_))
    }
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("accessory unique id must not be empty")]
    EmptyUniqueId,

    #[error("characteristic type must not be empty")]
    EmptyCharacteristicType,

    #[error("service type must not be empty")]
    EmptyServiceType,

    #[error("characteristic '{type_name}' has minValue {min} greater than maxValue {max}")]
    InvertedBounds { type_name: String, min: f64, max: f64 },

    #[error("characteristic type '{0}' appears more than once in the service")]
    DuplicateCharacteristic(String),
}

/// A requested record, or a required request field, does not exist.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NotFoundError {
    #[error("{0} should not be null or undefined")]
    MissingField(&'static str),

    #[error("accessory with unique id '{0}' not found")]
    Accessory(AccessoryUniqueId),

    #[error(
        "invalid characteristic type '{type_name}', valid types are: {}",
        .writable.join(", ")
    )]
    Characteristic {
        type_name: String,
        writable: Vec<String>,
    },
}

/// An incoming value could not be turned into a characteristic value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoercionError {
    /// The value does not parse into the characteristic's format.
    #[error("invalid value {value} for a {format} characteristic")]
    InvalidType {
        format: CharacteristicFormat,
        value: String,
    },

    /// The value parses but violates the declared bounds.
    #[error("value {value} is out of range, expected {}", describe_bounds(.min, .max))]
    OutOfRange {
        value: f64,
        min: Option<f64>,
        max: Option<f64>,
    },
}

/// Raw characteristic access requires insecure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("insecure mode must be enabled to view and control accessory characteristics")]
pub struct AccessDeniedError;

#[allow(clippy::ref_option)]
fn describe_bounds(min: &Option<f64>, max: &Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("a value between {min} and {max}"),
        (Some(min), None) => format!("a value of at least {min}"),
        (None, Some(max)) => format!("a value of at most {max}"),
        (None, None) => "any value".to_string(),
    }
}
