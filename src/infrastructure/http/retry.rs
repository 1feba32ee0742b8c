use super::LookupError;
use crate::infrastructure::http::pacing::Sleeper;
use rand::{thread_rng, Rng};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Bounded-attempt retry with uniform-random backoff inside configured
/// bounds. Only [`LookupError::Transient`] failures are retried; upstream
/// rejections surface immediately.
#[derive(Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff_min_ms: u64,
    backoff_max_ms: u64,
    sleeper: Arc<dyn Sleeper>,
}

impl RetryPolicy {
    pub fn new(
        max_attempts: u32,
        backoff_min_ms: u64,
        backoff_max_ms: u64,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_min_ms,
            backoff_max_ms: backoff_max_ms.max(backoff_min_ms),
            sleeper,
        }
    }

    fn backoff_delay(&self) -> Duration {
        Duration::from_millis(thread_rng().gen_range(self.backoff_min_ms..=self.backoff_max_ms))
    }

    /// Run `op` until it succeeds, fails non-transiently, or attempts run out.
    pub async fn execute<T, F, Fut>(&self, what: &str, mut op: F) -> Result<T, LookupError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, LookupError>>,
    {
        let mut last = String::new();
        for attempt in 1..=self.max_attempts {
            match op().await {
                Ok(value) => return Ok(value),
                Err(LookupError::Transient(msg)) => {
                    last = msg;
                    if attempt < self.max_attempts {
                        let delay = self.backoff_delay();
                        eprintln!(
                            "Warning: attempt {attempt}/{} for {what} failed: {last}; retrying in {delay:?}",
                            self.max_attempts
                        );
                        self.sleeper.sleep(delay).await;
                    }
                }
                Err(other) => return Err(other),
            }
        }
        Err(LookupError::Exhausted {
            attempts: self.max_attempts,
            last,
        })
    }
}
