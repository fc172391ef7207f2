//! Relevance scoring, theme refinement and filtering.

pub mod filter;
pub mod scorer;

use gurukul_core::constants::DEFAULT_THEME;
use gurukul_core::ScoredVerse;

pub use filter::{filter_verses, DropReason, DroppedVerse, FilterReport};
pub use scorer::{FactorScores, RelevanceScorer, ScorerWeights};

use crate::lexicon::themes::is_theme;

/// Give verses tagged only with the default theme the names of their active
/// semantic fields that are also known themes. Returns how many were retagged.
pub fn refine_themes(verses: &mut [ScoredVerse], question: &str) -> usize {
    let mut refined = 0;
    for scored in verses.iter_mut() {
        let verse = &mut scored.verse;
        if verse.themes.len() != 1 || verse.themes[0] != DEFAULT_THEME {
            continue;
        }
        let fields: Vec<&str> = {
            let text = verse.scoring_text();
            scorer::active_fields(&text, question)
                .into_iter()
                .filter(|f| is_theme(f))
                .collect()
        };
        if fields.is_empty() {
            continue;
        }
        verse.themes.clear();
        for field in fields {
            verse.add_theme(field);
        }
        refined += 1;
    }
    refined
}
