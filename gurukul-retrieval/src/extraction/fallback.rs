//! Seed-set fallback: built-in verses filtered by theme/concept overlap.

use gurukul_core::{CandidateVerse, SemanticProfile};

use crate::lexicon::FALLBACK_SEEDS;

/// Seed verses sharing a tag with the profile's themes or concepts.
/// An empty result is a valid outcome.
pub fn seed_verses(profile: &SemanticProfile) -> Vec<CandidateVerse> {
    FALLBACK_SEEDS
        .iter()
        .filter(|seed| seed.overlaps(profile))
        .map(|seed| seed.to_candidate())
        .collect()
}
