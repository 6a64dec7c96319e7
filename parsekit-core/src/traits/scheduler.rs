//! Timer capability for retry scheduling.

use async_trait::async_trait;
use std::time::Duration;

/// Scheduling capability the dispatcher suspends on between retries.
///
/// The production implementation sleeps on the runtime clock. Tests inject
/// a double that records the requested delays and returns immediately,
/// which makes the retry loop fully deterministic.
#[async_trait]
pub trait RetryScheduler: Send + Sync {
    /// Suspends the caller for at least `duration`.
    async fn delay(&self, duration: Duration);
}
