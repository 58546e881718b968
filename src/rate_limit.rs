use std::time::Duration;
use tokio::time::Instant;

/// Spaces consecutive calls at least `interval` apart, measured start to start.
///
/// The limiter owns its last-call timestamp and is driven by one caller at a
/// time through `&mut self`. Time comes from the tokio clock, so tests can run
/// it with paused time.
#[derive(Debug)]
pub struct RateLimiter {
    interval: Duration,
    last_call: Option<Instant>,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        RateLimiter {
            interval,
            last_call: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Sleeps until `interval` has elapsed since the previous permitted call,
    /// then records now as the start of the next one.
    pub async fn wait(&mut self) {
        if let Some(last) = self.last_call {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                tokio::time::sleep(self.interval - elapsed).await;
            }
        }
        self.last_call = Some(Instant::now());
    }
}
