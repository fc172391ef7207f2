use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Verses scoring strictly below this are dropped.
    pub min_relevance: f64,
    /// Maximum number of verses kept after thresholding.
    pub top_k: usize,
    /// Expand the query with root synonyms before hitting the backend.
    pub query_expansion: bool,
    /// Score candidates on the rayon pool.
    pub parallel_scoring: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            min_relevance: defaults::DEFAULT_MIN_RELEVANCE,
            top_k: defaults::DEFAULT_TOP_K,
            query_expansion: defaults::DEFAULT_QUERY_EXPANSION,
            parallel_scoring: defaults::DEFAULT_PARALLEL_SCORING,
        }
    }
}
