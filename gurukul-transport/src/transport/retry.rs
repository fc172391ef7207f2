//! Bounded retry with exponential backoff. Only transient errors are retried.

use std::time::Duration;

use gurukul_core::config::BackendConfig;
use gurukul_core::errors::{GurukulResult, RetrievalError};
use gurukul_observability::tracing_setup::events;

/// Retry settings for backend calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, the first one included. Zero behaves as one.
    pub max_attempts: u32,
    /// Initial backoff duration (doubles each retry).
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    pub fn from_config(config: &BackendConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
            max_backoff: Duration::from_millis(config.max_backoff_ms),
        }
    }

    /// Delay before retry number `retry` (1-based).
    pub fn backoff_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.initial_backoff
            .checked_mul(factor)
            .unwrap_or(self.max_backoff)
            .min(self.max_backoff)
    }

    /// Run `op` until it succeeds, fails permanently, or retries run out.
    ///
    /// `op` receives the 0-based attempt number. `sleep` is called between
    /// attempts with the backoff delay.
    pub fn run<T>(
        &self,
        mut op: impl FnMut(u32) -> GurukulResult<T>,
        mut sleep: impl FnMut(Duration),
    ) -> GurukulResult<T> {
        let mut last_err = String::new();
        let attempts = self.max_attempts.max(1);

        for attempt in 0..attempts {
            if attempt > 0 {
                let backoff = self.backoff_for(attempt);
                events::retrieval_retry(
                    attempt,
                    attempts,
                    backoff.as_millis() as u64,
                    &last_err,
                );
                sleep(backoff);
            }

            match op(attempt) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() => {
                    tracing::warn!(attempt, error = %e, "backend request failed");
                    last_err = e.to_string();
                }
                Err(e) => return Err(e),
            }
        }

        Err(RetrievalError::RetriesExhausted {
            attempts,
            last_error: last_err,
        }
        .into())
    }
}
