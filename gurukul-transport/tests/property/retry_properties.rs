//! Property tests for the retry policy: bounded attempts and capped,
//! non-decreasing backoff.

use std::time::Duration;

use proptest::prelude::*;

use gurukul_core::errors::{GurukulResult, RetrievalError};
use gurukul_transport::RetryPolicy;

proptest! {
    #[test]
    fn backoff_is_non_decreasing_and_capped(
        initial_ms in 1u64..5_000,
        max_ms in 1u64..60_000,
        retries in 1u32..64,
    ) {
        let policy = RetryPolicy {
            max_attempts: retries + 1,
            initial_backoff: Duration::from_millis(initial_ms),
            max_backoff: Duration::from_millis(max_ms),
        };
        let mut previous = Duration::ZERO;
        for retry in 1..=retries {
            let backoff = policy.backoff_for(retry);
            prop_assert!(backoff <= policy.max_backoff);
            prop_assert!(backoff >= previous);
            previous = backoff;
        }
    }

    #[test]
    fn transient_failures_use_every_attempt(attempts in 1u32..8) {
        let policy = RetryPolicy {
            max_attempts: attempts,
            ..RetryPolicy::default()
        };
        let mut calls = 0u32;
        let mut sleeps = 0u32;
        let result: GurukulResult<()> = policy.run(
            |_| {
                calls += 1;
                Err(RetrievalError::Timeout { timeout_ms: 1 }.into())
            },
            |_| sleeps += 1,
        );
        prop_assert!(result.is_err());
        prop_assert_eq!(calls, attempts);
        prop_assert_eq!(sleeps, attempts - 1);
    }
}
