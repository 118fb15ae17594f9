//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp recording when an accessory snapshot was fetched.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
