//! Four-factor relevance scorer.
//!
//! Factors: lexical term-vector similarity, semantic field membership,
//! theological context, authenticity markers.

use gurukul_core::errors::ScoringError;
use gurukul_core::{CandidateVerse, ScoredVerse, SemanticProfile};
use gurukul_observability::scoring_span;
use rayon::prelude::*;

use crate::extraction::markers::{self, RE_COLLECTION, RE_VERSE_NUMBER};
use crate::lexicon::{term_vector, AUTHENTICITY_LABELS, SEMANTIC_FIELDS, THEOLOGICAL_MARKERS};
use crate::terms::extract_terms;

/// Weights and constants of the four factors.
#[derive(Debug, Clone)]
pub struct ScorerWeights {
    /// Upper bound of the lexical sum. Lexical points are added unweighted.
    pub lexical_cap: f64,
    pub semantic_field: f64,
    pub theological: f64,
    pub authenticity: f64,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            lexical_cap: 0.40,
            semantic_field: 0.35,
            theological: 0.15,
            authenticity: 0.10,
        }
    }
}

/// Value of one active semantic field.
const FIELD_ACTIVATION: f64 = 0.8;
const THEOLOGICAL_BASE: f64 = 0.3;
const AUTHENTICITY_BASE: f64 = 0.5;
const MARKER_STEP: f64 = 0.1;

/// Unweighted sub-scores, each already clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScores {
    pub lexical: f64,
    pub semantic_field: f64,
    pub theological: f64,
    pub authenticity: f64,
}

impl FactorScores {
    fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("lexical", self.lexical),
            ("semantic_field", self.semantic_field),
            ("theological", self.theological),
            ("authenticity", self.authenticity),
        ]
    }
}

/// Cosine similarity of two vectors. Zero vectors score 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (*x as f64) * (*y as f64))
        .sum();
    let norm_a: f64 = a.iter().map(|x| (*x as f64) * (*x as f64)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| (*x as f64) * (*x as f64)).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

fn similarity_points(similarity: f64) -> f64 {
    if similarity > 0.8 {
        0.15
    } else if similarity > 0.6 {
        0.10
    } else if similarity > 0.4 {
        0.05
    } else {
        0.0
    }
}

/// Bucketed similarity summed over every (question term, fragment term)
/// pair where both terms have a vector. Terms without one are skipped.
pub fn lexical_score(fragment: &str, question: &str, cap: f64) -> f64 {
    let query_vectors: Vec<_> = extract_terms(question)
        .iter()
        .filter_map(|t| term_vector(t))
        .collect();
    if query_vectors.is_empty() {
        return 0.0;
    }
    let fragment_vectors: Vec<_> = extract_terms(fragment)
        .iter()
        .filter_map(|t| term_vector(t))
        .collect();

    let total: f64 = query_vectors
        .iter()
        .flat_map(|q| fragment_vectors.iter().map(move |f| (q, f)))
        .map(|(q, f)| similarity_points(cosine_similarity(&q[..], &f[..])))
        .sum();
    total.min(cap)
}

/// Semantic fields with a keyword in the fragment or the question.
pub fn active_fields(fragment: &str, question: &str) -> Vec<&'static str> {
    let fragment = fragment.to_lowercase();
    let question = question.to_lowercase();
    SEMANTIC_FIELDS
        .iter()
        .filter(|(_, keywords)| {
            keywords
                .iter()
                .any(|kw| fragment.contains(kw) || question.contains(kw))
        })
        .map(|(field, _)| *field)
        .collect()
}

/// Mean activation over active fields; 0 when none is active.
pub fn semantic_field_score(fragment: &str, question: &str) -> f64 {
    let active = active_fields(fragment, question);
    if active.is_empty() {
        return 0.0;
    }
    let sum: f64 = active.iter().map(|_| FIELD_ACTIVATION).sum();
    (sum / active.len() as f64).clamp(0.0, 1.0)
}

/// Base plus one step per theological marker present in the fragment.
pub fn theological_score(fragment: &str) -> f64 {
    let lower = fragment.to_lowercase();
    let hits = THEOLOGICAL_MARKERS
        .iter()
        .flat_map(|(_, keywords)| keywords.iter())
        .filter(|kw| lower.contains(*kw))
        .count();
    (THEOLOGICAL_BASE + MARKER_STEP * hits as f64).clamp(0.0, 1.0)
}

/// Base plus one step each for a collection name, a "verse N" locator and
/// an explicit transliteration label.
pub fn authenticity_score(fragment: &str) -> f64 {
    let mut hits = 0usize;
    if markers::is_match(&RE_COLLECTION, fragment) {
        hits += 1;
    }
    if markers::is_match(&RE_VERSE_NUMBER, fragment) {
        hits += 1;
    }
    hits += AUTHENTICITY_LABELS
        .iter()
        .filter(|label| fragment.contains(*label))
        .count();
    (AUTHENTICITY_BASE + MARKER_STEP * hits as f64).clamp(0.0, 1.0)
}

/// Stateless scorer; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct RelevanceScorer {
    weights: ScorerWeights,
}

impl RelevanceScorer {
    pub fn new(weights: ScorerWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScorerWeights {
        &self.weights
    }

    pub fn factors(&self, fragment: &str, question: &str) -> FactorScores {
        FactorScores {
            lexical: lexical_score(fragment, question, self.weights.lexical_cap),
            semantic_field: semantic_field_score(fragment, question),
            theological: theological_score(fragment),
            authenticity: authenticity_score(fragment),
        }
    }

    /// Score one fragment into [0.0, 1.0].
    ///
    /// The four factors read only the fragment and the question; the
    /// profile is unused today.
    pub fn score_fragment(
        &self,
        fragment: &str,
        _profile: &SemanticProfile,
        question: &str,
        reference: &str,
    ) -> Result<f64, ScoringError> {
        let factors = self.factors(fragment, question);
        if let Some((factor, _)) = factors.named().iter().find(|(_, v)| !v.is_finite()) {
            return Err(ScoringError::NonFiniteScore {
                factor: factor.to_string(),
                reference: reference.to_string(),
            });
        }
        let w = &self.weights;
        let total = factors.lexical
            + factors.semantic_field * w.semantic_field
            + factors.theological * w.theological
            + factors.authenticity * w.authenticity;
        if !total.is_finite() {
            return Err(ScoringError::NonFiniteScore {
                factor: "total".to_string(),
                reference: reference.to_string(),
            });
        }
        Ok(total.clamp(0.0, 1.0))
    }

    fn score_one(
        &self,
        verse: CandidateVerse,
        profile: &SemanticProfile,
        question: &str,
    ) -> Result<ScoredVerse, (CandidateVerse, ScoringError)> {
        let result = {
            let text = verse.scoring_text();
            self.score_fragment(&text, profile, question, &verse.reference)
        };
        match result {
            Ok(score) => Ok(ScoredVerse::new(verse, score)),
            Err(e) => Err((verse, e)),
        }
    }

    /// Score every verse, keeping input order. A verse whose score fails is
    /// kept with relevance 0 and the error is returned alongside.
    pub fn score_all(
        &self,
        verses: Vec<CandidateVerse>,
        profile: &SemanticProfile,
        question: &str,
        parallel: bool,
    ) -> (Vec<ScoredVerse>, Vec<ScoringError>) {
        let span = scoring_span!(verses.len());
        let _guard = span.enter();

        let results: Vec<_> = if parallel {
            verses
                .into_par_iter()
                .map(|v| self.score_one(v, profile, question))
                .collect()
        } else {
            verses
                .into_iter()
                .map(|v| self.score_one(v, profile, question))
                .collect()
        };

        let mut scored = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(v) => scored.push(v),
                Err((verse, e)) => {
                    tracing::warn!(reference = %verse.reference, error = %e, "scoring failed, using 0");
                    scored.push(ScoredVerse::new(verse, 0.0));
                    failures.push(e);
                }
            }
        }
        (scored, failures)
    }
}
