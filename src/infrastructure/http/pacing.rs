use async_trait::async_trait;
use rand::{thread_rng, Rng};
use std::sync::Arc;
use std::time::Duration;

/// Clock capability behind all deliberate delays. Injected so pacing policy
/// is testable without real waiting.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, delay: Duration);
}

/// Real delays on the tokio timer.
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Skips every delay. For tests and dry runs.
pub struct NoopSleeper;

#[async_trait]
impl Sleeper for NoopSleeper {
    async fn sleep(&self, _delay: Duration) {}
}

/// Politeness delay between independent lookups: a uniform-random pause
/// inside configured bounds. Zero bounds disable the pause entirely.
#[derive(Clone)]
pub struct Throttle {
    pause_min_ms: u64,
    pause_max_ms: u64,
    sleeper: Arc<dyn Sleeper>,
}

impl Throttle {
    pub fn new(pause_min_ms: u64, pause_max_ms: u64, sleeper: Arc<dyn Sleeper>) -> Self {
        Self {
            pause_min_ms,
            pause_max_ms: pause_max_ms.max(pause_min_ms),
            sleeper,
        }
    }

    pub async fn pause(&self) {
        if self.pause_max_ms == 0 {
            return;
        }
        let delay =
            Duration::from_millis(thread_rng().gen_range(self.pause_min_ms..=self.pause_max_ms));
        self.sleeper.sleep(delay).await;
    }
}
