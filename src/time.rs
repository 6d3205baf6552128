//! Time abstraction for testability.
//!
//! This module provides a [`Sleeper`] trait that allows retry loops to wait
//! between attempts without tying tests to real wall-clock delays.

use std::time::Duration;

/// Abstraction over asynchronous sleeping.
///
/// Production code uses [`TokioSleeper`]; tests inject [`InstantSleeper`]
/// (or their own recording implementation) so retry delays complete at once.
///
/// # Example
///
/// ```
/// use pushqueue::time::{InstantSleeper, Sleeper};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// InstantSleeper.sleep(Duration::from_secs(3600)).await;
/// # }
/// ```
pub trait Sleeper: Send + Sync {
    /// Waits for the given duration.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}

/// Production sleeper backed by [`tokio::time::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sleeper that returns immediately, regardless of the requested duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}
