//! Span definitions per pipeline stage: request, retrieval, extraction, scoring, clustering.

/// Create the per-request pipeline span.
#[macro_export]
macro_rules! pipeline_span {
    ($correlation_id:expr, $intent:expr) => {
        tracing::info_span!("gurukul.pipeline", correlation_id = %$correlation_id, intent = %$intent)
    };
}

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($backend:expr, $query_len:expr) => {
        tracing::info_span!("gurukul.retrieval", backend = %$backend, query_len = $query_len)
    };
}

/// Create an extraction span.
#[macro_export]
macro_rules! extraction_span {
    ($strategy:expr) => {
        tracing::debug_span!("gurukul.extraction", strategy = %$strategy)
    };
}

/// Create a scoring span.
#[macro_export]
macro_rules! scoring_span {
    ($candidates:expr) => {
        tracing::debug_span!("gurukul.scoring", candidates = $candidates)
    };
}

/// Create a clustering span.
#[macro_export]
macro_rules! clustering_span {
    ($verses:expr) => {
        tracing::debug_span!("gurukul.clustering", verses = $verses)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PIPELINE: &str = "gurukul.pipeline";
    pub const RETRIEVAL: &str = "gurukul.retrieval";
    pub const EXTRACTION: &str = "gurukul.extraction";
    pub const SCORING: &str = "gurukul.scoring";
    pub const CLUSTERING: &str = "gurukul.clustering";
}
