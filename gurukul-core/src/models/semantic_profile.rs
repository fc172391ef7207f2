use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::intent::Intent;

/// What a question is about. Built once by the analyzer and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticProfile {
    pub intent: Intent,
    /// Matched themes in dictionary order. Never empty.
    pub themes: Vec<String>,
    /// Matched concepts in dictionary order, without duplicates.
    pub concepts: Vec<String>,
    /// Capitalized tokens in question order. Duplicates are kept.
    pub entities: Vec<String>,
    /// Caller-supplied context, passed through untouched.
    pub context: HashMap<String, serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl SemanticProfile {
    /// Whether `tag` names one of the profile's themes or concepts.
    pub fn mentions(&self, tag: &str) -> bool {
        self.themes.iter().chain(self.concepts.iter()).any(|t| t == tag)
    }
}
