//! # gurukul-core
//!
//! Foundation crate for the Gurukul verse retrieval pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod intent;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GurukulConfig;
pub use errors::{GurukulError, GurukulResult};
pub use intent::Intent;
pub use models::{CandidateVerse, Cluster, ScoredVerse, SemanticProfile};
