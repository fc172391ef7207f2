//! # gurukul-observability
//!
//! Tracing subscriber setup, span macros for each pipeline stage, structured
//! log events, and the per-request degradation tracker.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::DegradationTracker;
pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
