//! Error handling for Gurukul.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod extraction_error;
pub mod retrieval_error;
pub mod scoring_error;

pub use config_error::ConfigError;
pub use extraction_error::ExtractionError;
pub use retrieval_error::RetrievalError;
pub use scoring_error::ScoringError;

/// Result alias used across the workspace.
pub type GurukulResult<T> = Result<T, GurukulError>;

/// Top-level error. Only `Configuration` and `Authentication` abort a
/// request; every other variant degrades to a thinner response.
#[derive(Debug, thiserror::Error)]
pub enum GurukulError {
    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    #[error("authentication failed: {reason}")]
    Authentication { reason: String },

    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl GurukulError {
    /// Errors that end the request with no fallback.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::Authentication { .. })
    }

    /// Errors worth another attempt against the backend.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Retrieval(e) => e.is_transient(),
            _ => false,
        }
    }
}

impl From<ConfigError> for GurukulError {
    fn from(e: ConfigError) -> Self {
        Self::Configuration {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for GurukulError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            reason: e.to_string(),
        }
    }
}
