//! Verse extraction from heterogeneous backend responses.
//!
//! Shape strategies are tried in priority order; the first non-empty result
//! wins. When every strategy fails or comes back empty, the seed set takes
//! over.

pub mod fallback;
pub mod fields;
pub mod free_text;
pub mod markers;
pub mod structured;

use gurukul_core::errors::ExtractionError;
use gurukul_core::{CandidateVerse, SemanticProfile};
use gurukul_observability::extraction_span;
use gurukul_observability::tracing_setup::events;
use serde_json::Value;

pub use free_text::FreeTextStrategy;
pub use structured::StructuredStrategy;

/// One response shape. `UnrecognizedShape` means "not mine, try the next".
pub trait ExtractionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract(
        &self,
        raw: &Value,
        profile: &SemanticProfile,
    ) -> Result<Vec<CandidateVerse>, ExtractionError>;
}

/// Name reported when the seed set produced the verses.
pub const FALLBACK_STRATEGY: &str = "seed_fallback";

/// What extraction produced and how.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    pub verses: Vec<CandidateVerse>,
    /// Strategy that produced `verses`.
    pub strategy: &'static str,
    /// Why the seed set was used, when it was.
    pub fallback_reason: Option<String>,
}

impl ExtractionOutcome {
    pub fn used_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

/// Ordered chain of shape strategies with the seed set as the last resort.
pub struct VerseExtractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl Default for VerseExtractor {
    fn default() -> Self {
        Self::new(vec![
            Box::new(StructuredStrategy),
            Box::new(FreeTextStrategy),
        ])
    }
}

impl VerseExtractor {
    pub fn new(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self { strategies }
    }

    /// Strategy names in the order they are tried.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Run the chain. Never fails.
    pub fn extract(&self, raw: &Value, profile: &SemanticProfile) -> ExtractionOutcome {
        let mut failures = Vec::new();
        for strategy in &self.strategies {
            let span = extraction_span!(strategy.name());
            let _guard = span.enter();
            match strategy.extract(raw, profile) {
                Ok(verses) if !verses.is_empty() => {
                    tracing::debug!(strategy = strategy.name(), verses = verses.len(), "extracted verses");
                    return ExtractionOutcome {
                        verses,
                        strategy: strategy.name(),
                        fallback_reason: None,
                    };
                }
                Ok(_) => failures.push(format!("{}: no verses", strategy.name())),
                Err(e) => failures.push(format!("{}: {e}", strategy.name())),
            }
        }

        let reason = if failures.is_empty() {
            "no extraction strategies".to_string()
        } else {
            failures.join("; ")
        };
        let verses = fallback::seed_verses(profile);
        events::fallback_engaged(&reason, verses.len());
        ExtractionOutcome {
            verses,
            strategy: FALLBACK_STRATEGY,
            fallback_reason: Some(reason),
        }
    }
}

/// Extract candidate verses from a raw response with the default chain.
pub fn extract_verses(raw: &Value, profile: &SemanticProfile) -> Vec<CandidateVerse> {
    VerseExtractor::default().extract(raw, profile).verses
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;
    use crate::analysis::SemanticAnalyzer;

    struct Failing;

    impl ExtractionStrategy for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn extract(
            &self,
            _raw: &Value,
            _profile: &SemanticProfile,
        ) -> Result<Vec<CandidateVerse>, ExtractionError> {
            Err(ExtractionError::UnrecognizedShape {
                shape: "failing".to_string(),
            })
        }
    }

    fn profile(q: &str) -> SemanticProfile {
        SemanticAnalyzer::new().analyze(q, &HashMap::new())
    }

    #[test]
    fn default_chain_order() {
        assert_eq!(
            VerseExtractor::default().strategy_names(),
            vec!["structured", "free_text"]
        );
    }

    #[test]
    fn structured_wins_over_free_text() {
        let raw = json!({
            "answer": {
                "answerText": "Rig Veda 1.32.1 indraṃ",
                "steps": [ { "actions": [ { "observation": { "searchResults": [
                    { "snippetInfo": [ { "snippet": "Rig Veda 1.1.1 agnimīḷe" } ] }
                ] } } ] } ]
            }
        });
        let outcome = VerseExtractor::default().extract(&raw, &profile("devotion"));
        assert_eq!(outcome.strategy, "structured");
        assert_eq!(outcome.verses[0].reference, "Rig Veda 1.1.1");
        assert!(!outcome.used_fallback());
    }

    #[test]
    fn empty_structured_result_falls_to_free_text() {
        let raw = json!({
            "answer": {
                "answerText": "Rig Veda 1.32.1 indraṃ",
                "steps": []
            }
        });
        let outcome = VerseExtractor::default().extract(&raw, &profile("devotion"));
        assert_eq!(outcome.strategy, "free_text");
    }

    #[test]
    fn unparseable_payload_uses_seeds() {
        let outcome = VerseExtractor::default().extract(&json!("<html>"), &profile("devotion"));
        assert!(outcome.used_fallback());
        assert_eq!(outcome.strategy, FALLBACK_STRATEGY);
        assert_eq!(outcome.verses.len(), 2);
    }

    #[test]
    fn default_theme_fallback_is_empty() {
        let verses = extract_verses(&json!({ "unexpected": true }), &profile("hello there"));
        assert!(verses.is_empty());
    }

    #[test]
    fn custom_chain_falls_back() {
        let extractor = VerseExtractor::new(vec![Box::new(Failing)]);
        let outcome = extractor.extract(&json!({}), &profile("thunder"));
        assert!(outcome.fallback_reason.unwrap().contains("failing"));
        assert_eq!(outcome.verses.len(), 1);
    }
}
