//! Structured log events for key pipeline operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a retry against the backend.
pub fn retrieval_retry(attempt: u32, max_attempts: u32, backoff_ms: u64, error: &str) {
    tracing::debug!(
        event = "retrieval_retry",
        attempt = attempt,
        max_attempts = max_attempts,
        backoff_ms = backoff_ms,
        error = %error,
        "retrying backend request"
    );
}

/// Log the seed-set fallback taking over extraction.
pub fn fallback_engaged(reason: &str, seeds_kept: usize) {
    tracing::info!(
        event = "fallback_engaged",
        reason = %reason,
        seeds_kept = seeds_kept,
        "extraction fell back to seed verses"
    );
}

/// Log a fragment skipped during extraction.
pub fn fragment_skipped(location: &str, reason: &str) {
    tracing::debug!(
        event = "fragment_skipped",
        location = %location,
        reason = %reason,
        "fragment skipped"
    );
}

/// Log a verse dropped by the filter.
pub fn verse_dropped(reference: &str, relevance: f64, reason: &str) {
    tracing::debug!(
        event = "verse_dropped",
        reference = %reference,
        relevance = relevance,
        reason = %reason,
        "verse dropped"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log a completed request.
pub fn pipeline_completed(clusters: usize, verses: usize, elapsed_ms: u64) {
    tracing::info!(
        event = "pipeline_completed",
        clusters = clusters,
        verses = verses,
        elapsed_ms = elapsed_ms,
        "pipeline completed"
    );
}
