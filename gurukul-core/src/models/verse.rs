use serde::{Deserialize, Serialize};

/// An unscored verse produced by extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateVerse {
    pub reference: String,
    pub sanskrit: String,
    pub translation: String,
    pub interpretation: String,
    /// Theme tags, without duplicates. May be refined after scoring.
    pub themes: Vec<String>,
    /// Raw text the verse was extracted from; scoring reads this.
    #[serde(skip)]
    pub fragment: String,
}

impl CandidateVerse {
    /// Rebuild a labelled fragment from the structured fields. Used for verses
    /// that never had a raw fragment, such as fallback seeds.
    pub fn compose_fragment(&self) -> String {
        format!(
            "{}\nSanskrit Transliteration: {}\nTranslation: {}\nInterpretation: {}",
            self.reference, self.sanskrit, self.translation, self.interpretation
        )
    }

    /// Text to score: the raw fragment, or the composed one when absent.
    pub fn scoring_text(&self) -> std::borrow::Cow<'_, str> {
        if self.fragment.trim().is_empty() {
            std::borrow::Cow::Owned(self.compose_fragment())
        } else {
            std::borrow::Cow::Borrowed(self.fragment.as_str())
        }
    }

    /// Add a theme tag unless already present.
    pub fn add_theme(&mut self, theme: &str) {
        if !self.themes.iter().any(|t| t == theme) {
            self.themes.push(theme.to_string());
        }
    }
}

/// A candidate verse with its relevance in [0.0, 1.0].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredVerse {
    pub verse: CandidateVerse,
    pub relevance: f64,
}

impl ScoredVerse {
    /// Wrap a verse, clamping relevance into [0.0, 1.0]. NaN becomes 0.
    pub fn new(verse: CandidateVerse, relevance: f64) -> Self {
        let relevance = if relevance.is_nan() {
            0.0
        } else {
            relevance.clamp(0.0, 1.0)
        };
        Self { verse, relevance }
    }
}
