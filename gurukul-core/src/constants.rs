/// Gurukul system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Collector version reported in response metadata.
pub const COLLECTOR_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"), "-rust");

/// Theme assigned when no theme keyword matches a question.
pub const DEFAULT_THEME: &str = "general_wisdom";

/// Sentinel used when a fragment carries no translation.
pub const TRANSLATION_SENTINEL: &str = "Translation not available";

/// Sentinel used when a fragment carries no interpretation.
pub const INTERPRETATION_SENTINEL: &str = "Spiritual interpretation of the verse";

/// Maximum characters of a document title kept when deriving a reference.
pub const MAX_TITLE_REFERENCE_CHARS: usize = 50;

/// Minimum character length of an extracted term.
pub const MIN_TERM_CHARS: usize = 3;
