/// Retrieval backend errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("backend timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("backend returned HTTP {status}: {body}")]
    BackendApi {
        status: u16,
        body: String,
        retryable: bool,
    },

    #[error("all {attempts} attempts exhausted: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },
}

impl RetrievalError {
    /// Timeouts, network failures, and retryable API statuses.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Network { .. } => true,
            Self::BackendApi { retryable, .. } => *retryable,
            Self::RetriesExhausted { .. } => false,
        }
    }
}
