//! Retry policy for sticky pushes.

use std::time::Duration;

/// Controls how [`PushClient::sticky_push`] retries "not ready" replies.
///
/// The default policy retries immediately and without limit, so a server
/// that keeps answering "not ready" keeps the call running forever. Callers
/// that need a termination guarantee set [`max_attempts`](Self::max_attempts)
/// or wrap the call in a deadline.
///
/// # Defaults
///
/// - `max_attempts`: unbounded
/// - `initial_delay`: 0 (retry immediately)
/// - `max_delay`: 60 seconds
/// - `multiplier`: 2.0
///
/// # Example
///
/// ```
/// use pushqueue::push::StickyPolicy;
/// use std::time::Duration;
///
/// let bounded = StickyPolicy::new()
///     .with_max_attempts(10)
///     .with_initial_delay(Duration::from_millis(200))
///     .with_max_delay(Duration::from_secs(5));
///
/// assert_eq!(bounded.max_attempts, Some(10));
/// ```
///
/// [`PushClient::sticky_push`]: super::PushClient::sticky_push
#[derive(Debug, Clone, PartialEq)]
pub struct StickyPolicy {
    /// Maximum number of attempts, including the first one.
    ///
    /// `None` retries for as long as the server reports "not ready".
    pub max_attempts: Option<u32>,

    /// Delay before the first retry.
    ///
    /// Subsequent delays are computed by multiplying by `multiplier`.
    pub initial_delay: Duration,

    /// Maximum delay between retries.
    pub max_delay: Duration,

    /// Multiplier applied to the delay after each retry.
    pub multiplier: f64,
}

impl StickyPolicy {
    /// Default initial delay (no delay).
    pub const DEFAULT_INITIAL_DELAY: Duration = Duration::ZERO;

    /// Default maximum delay (60 seconds).
    pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(60);

    /// Default multiplier (2.0).
    pub const DEFAULT_MULTIPLIER: f64 = 2.0;

    /// Minimum value for `max_attempts`.
    pub const MIN_MAX_ATTEMPTS: u32 = 1;

    /// Creates an unbounded, immediate policy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: None,
            initial_delay: Self::DEFAULT_INITIAL_DELAY,
            max_delay: Self::DEFAULT_MAX_DELAY,
            multiplier: Self::DEFAULT_MULTIPLIER,
        }
    }

    /// Bounds the number of attempts.
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is less than 1.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        assert!(
            max_attempts >= Self::MIN_MAX_ATTEMPTS,
            "max_attempts must be at least 1"
        );
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Removes the attempt bound.
    #[must_use]
    pub const fn unbounded(mut self) -> Self {
        self.max_attempts = None;
        self
    }

    /// Sets the delay before the first retry.
    #[must_use]
    pub const fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Sets the maximum delay between retries.
    #[must_use]
    pub const fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Sets the delay multiplier.
    ///
    /// # Panics
    ///
    /// Panics if `multiplier` is not positive (must be > 0.0).
    #[must_use]
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        assert!(multiplier > 0.0, "multiplier must be positive");
        self.multiplier = multiplier;
        self
    }

    /// Computes the delay for a given retry number (0-indexed), capped at `max_delay`.
    ///
    /// A multiplier set directly to a non-positive or NaN value yields no delay.
    #[must_use]
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        if self.initial_delay.is_zero() {
            return Duration::ZERO;
        }

        // Exponents past i32::MAX saturate the delay at max_delay anyway
        let exponent = i32::try_from(retry).unwrap_or(i32::MAX);
        let delay_secs = self.initial_delay.as_secs_f64() * self.multiplier.powi(exponent);
        if delay_secs.is_nan() || delay_secs <= 0.0 {
            return Duration::ZERO;
        }

        let capped = delay_secs.min(self.max_delay.as_secs_f64());
        // f64 rounding can push a capped Duration::MAX past the representable range
        Duration::try_from_secs_f64(capped).unwrap_or(self.max_delay)
    }

    /// Returns true if another attempt may follow the given one.
    ///
    /// `attempt` is 1-based: 1 is the initial attempt.
    #[must_use]
    pub const fn should_retry(&self, attempt: u32) -> bool {
        match self.max_attempts {
            Some(max) => attempt < max,
            None => true,
        }
    }
}

impl Default for StickyPolicy {
    fn default() -> Self {
        Self::new()
    }
}
