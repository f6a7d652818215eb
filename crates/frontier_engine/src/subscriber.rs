use std::time::Duration;

use crate::SubscribeError;

pub const DEFAULT_COMPLETION_DELAY: Duration = Duration::from_millis(1000);

/// The external action behind a newsletter submission.
#[async_trait::async_trait]
pub trait Subscriber: Send + Sync {
    async fn subscribe(&self, email: &str) -> Result<(), SubscribeError>;
}

/// Completes every subscription successfully after a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubscriber {
    delay: Duration,
}

impl SimulatedSubscriber {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubscriber {
    fn default() -> Self {
        Self::new(DEFAULT_COMPLETION_DELAY)
    }
}

#[async_trait::async_trait]
impl Subscriber for SimulatedSubscriber {
    async fn subscribe(&self, _email: &str) -> Result<(), SubscribeError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
