//! Static read-only tables: theme and concept dictionaries, root expansions,
//! term vectors, semantic fields, scoring markers, and fallback seed verses.
//!
//! Everything here is a `const`/`static` initialized once and never mutated.

pub mod fields;
pub mod roots;
pub mod seeds;
pub mod themes;
pub mod vectors;

pub use fields::{AUTHENTICITY_LABELS, SEMANTIC_FIELDS, THEOLOGICAL_MARKERS};
pub use roots::ROOT_EXPANSIONS;
pub use seeds::{SeedVerse, FALLBACK_SEEDS};
pub use themes::{CONCEPT_KEYWORDS, THEME_KEYWORDS};
pub use vectors::{fold_diacritics, term_vector, TERM_VECTOR_DIMS};
