//! # gurukul-retrieval
//!
//! The verse pipeline. Answers a spiritual question with scored verses
//! grouped into ranked theme clusters.
//!
//! ## Architecture
//!
//! ```text
//! VerseRetrievalEngine
//! ├── SemanticAnalyzer
//! │   └── Classifier (keyword-group precedence)
//! ├── Query enhancement
//! │   └── root_expander (root → synonym sets)
//! ├── IRetrievalBackend (external, see gurukul-transport)
//! ├── VerseExtractor
//! │   ├── StructuredStrategy (steps → actions → search results → snippets)
//! │   ├── FreeTextStrategy (answer text split on "---")
//! │   └── Seed fallback (static verses, theme/concept overlap)
//! ├── Ranking
//! │   ├── extract_terms (IAST regex battery)
//! │   ├── RelevanceScorer (4-factor)
//! │   ├── Theme refinement
//! │   └── Filter (threshold + top-K, extraction order)
//! └── cluster_verses (theme → cluster, stable ranking)
//! ```

pub mod analysis;
pub mod clustering;
pub mod engine;
pub mod expansion;
pub mod extraction;
pub mod lexicon;
pub mod ranking;
pub mod terms;

pub use analysis::SemanticAnalyzer;
pub use clustering::cluster_verses;
pub use engine::{PipelineRun, VerseRetrievalEngine};
pub use expansion::{enhance, enhance_query};
pub use extraction::{extract_verses, ExtractionOutcome, ExtractionStrategy, VerseExtractor};
pub use ranking::{filter_verses, FilterReport, RelevanceScorer, ScorerWeights};
pub use terms::extract_terms;
