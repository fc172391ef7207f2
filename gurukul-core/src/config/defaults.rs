// Single source of truth for all default values.

// --- Retrieval pipeline ---
pub const DEFAULT_MIN_RELEVANCE: f64 = 0.1;
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_QUERY_EXPANSION: bool = true;
pub const DEFAULT_PARALLEL_SCORING: bool = true;

// --- Backend ---
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 30_000;
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_INCLUDE_CITATIONS: bool = true;
pub const DEFAULT_PREAMBLE: &str = "You are a scholar of Sanskrit scripture. For every verse you cite, \
give the collection and verse number, a line starting with 'Sanskrit Transliteration:', \
a line starting with 'Translation:' and a line starting with 'Interpretation:'. \
Separate verses with a line containing only ---.";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_OUTPUT: bool = true;
