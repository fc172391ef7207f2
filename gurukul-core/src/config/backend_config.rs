use serde::{Deserialize, Serialize};

use super::defaults;

/// Search/answer backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Answer endpoint URL.
    pub endpoint_url: Option<String>,
    /// Bearer credential for the endpoint.
    pub api_key: Option<String>,
    /// Backend session resource name, if the backend keeps sessions.
    pub session: Option<String>,
    /// Per-attempt request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Total attempts per request, the first one included.
    pub max_attempts: u32,
    /// Initial backoff in milliseconds (doubles each retry).
    pub initial_backoff_ms: u64,
    /// Backoff ceiling in milliseconds.
    pub max_backoff_ms: u64,
    /// Number of search results requested.
    pub page_size: usize,
    /// Ask the backend to attach citations to the generated answer.
    pub include_citations: bool,
    /// Preamble prompt for answer generation.
    pub preamble: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            api_key: None,
            session: None,
            timeout_ms: defaults::DEFAULT_TIMEOUT_MS,
            max_attempts: defaults::DEFAULT_MAX_ATTEMPTS,
            initial_backoff_ms: defaults::DEFAULT_INITIAL_BACKOFF_MS,
            max_backoff_ms: defaults::DEFAULT_MAX_BACKOFF_MS,
            page_size: defaults::DEFAULT_PAGE_SIZE,
            include_citations: defaults::DEFAULT_INCLUDE_CITATIONS,
            preamble: defaults::DEFAULT_PREAMBLE.to_string(),
        }
    }
}
