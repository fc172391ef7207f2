//! Threshold and top-K filter.
//!
//! Survivors keep their extraction order; ranking happens at cluster level.

use gurukul_core::ScoredVerse;
use gurukul_observability::tracing_setup::events;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    BelowThreshold,
    OverCapacity,
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BelowThreshold => "below_threshold",
            Self::OverCapacity => "over_capacity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroppedVerse {
    pub reference: String,
    pub relevance: f64,
    pub reason: DropReason,
}

/// Advisory record of what the filter removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterReport {
    pub kept: usize,
    pub dropped: Vec<DroppedVerse>,
}

impl FilterReport {
    pub fn count(&self, reason: DropReason) -> usize {
        self.dropped.iter().filter(|d| d.reason == reason).count()
    }
}

/// Drop verses scoring strictly below `min_relevance`, then keep the first
/// `top_k` survivors in input order.
pub fn filter_verses(
    verses: Vec<ScoredVerse>,
    min_relevance: f64,
    top_k: usize,
) -> (Vec<ScoredVerse>, FilterReport) {
    let mut report = FilterReport::default();
    let mut kept = Vec::with_capacity(top_k.min(verses.len()));

    for verse in verses {
        let reason = if verse.relevance < min_relevance {
            Some(DropReason::BelowThreshold)
        } else if kept.len() >= top_k {
            Some(DropReason::OverCapacity)
        } else {
            None
        };
        match reason {
            Some(reason) => {
                events::verse_dropped(&verse.verse.reference, verse.relevance, reason.as_str());
                report.dropped.push(DroppedVerse {
                    reference: verse.verse.reference,
                    relevance: verse.relevance,
                    reason,
                });
            }
            None => kept.push(verse),
        }
    }

    report.kept = kept.len();
    (kept, report)
}
