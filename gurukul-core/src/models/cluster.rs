use serde::{Deserialize, Serialize};

use super::verse::ScoredVerse;

/// Verses sharing one theme tag.
///
/// `relevance` is always the maximum member relevance; use [`Cluster::push`]
/// to keep that true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub theme: String,
    pub relevance: f64,
    pub verses: Vec<ScoredVerse>,
}

impl Cluster {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            relevance: 0.0,
            verses: Vec::new(),
        }
    }

    /// Append a member and raise the running max.
    pub fn push(&mut self, verse: ScoredVerse) {
        if verse.relevance > self.relevance {
            self.relevance = verse.relevance;
        }
        self.verses.push(verse);
    }
}
