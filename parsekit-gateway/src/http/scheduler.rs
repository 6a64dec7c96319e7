//! Tokio-backed retry scheduler.

use async_trait::async_trait;
use std::time::Duration;

use parsekit_core::traits::RetryScheduler;

/// Retry scheduler sleeping on the Tokio clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl TokioScheduler {
    /// Creates a new scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RetryScheduler for TokioScheduler {
    async fn delay(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
