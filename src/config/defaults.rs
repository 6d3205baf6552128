//! Default values for configuration options.

use std::time::Duration;

pub use crate::push::DEFAULT_ENDPOINT as ENDPOINT;

/// Default push body.
pub const BODY: &str = "";

/// Default maximum delay between sticky attempts in milliseconds.
pub const STICKY_MAX_DELAY_MS: u64 = 60_000;

/// Default sticky backoff multiplier.
pub const STICKY_MULTIPLIER: f64 = 2.0;

/// Default maximum sticky delay as Duration.
#[must_use]
pub const fn sticky_max_delay() -> Duration {
    Duration::from_millis(STICKY_MAX_DELAY_MS)
}
