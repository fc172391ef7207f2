//! Semantic analysis of a question: intent, themes, concepts, entities.

pub mod classifier;

use std::collections::HashMap;

use chrono::Utc;
use gurukul_core::constants::DEFAULT_THEME;
use gurukul_core::SemanticProfile;

use crate::lexicon::{CONCEPT_KEYWORDS, THEME_KEYWORDS};

/// Builds a [`SemanticProfile`] from question text. Pure and infallible.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticAnalyzer;

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(
        &self,
        question: &str,
        context: &HashMap<String, serde_json::Value>,
    ) -> SemanticProfile {
        SemanticProfile {
            intent: classifier::classify(question),
            themes: match_themes(question),
            concepts: match_concepts(question),
            entities: match_entities(question),
            context: context.clone(),
            created_at: Utc::now(),
        }
    }
}

/// Every theme with a keyword in `text`, in dictionary order. May be empty.
pub fn theme_matches(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    THEME_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(theme, _)| theme.to_string())
        .collect()
}

/// Themes of a question. Falls back to the default theme so the result is
/// never empty.
pub fn match_themes(question: &str) -> Vec<String> {
    let themes = theme_matches(question);
    if themes.is_empty() {
        vec![DEFAULT_THEME.to_string()]
    } else {
        themes
    }
}

/// Concepts whose keyword equals a whitespace token of the question.
/// Surrounding punctuation is trimmed from tokens before comparison.
pub fn match_concepts(question: &str) -> Vec<String> {
    let tokens: Vec<String> = question
        .split_whitespace()
        .map(|t| {
            t.trim_matches(|c: char| !c.is_alphanumeric() && c != '-')
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect();

    CONCEPT_KEYWORDS
        .iter()
        .filter(|(_, keywords)| tokens.iter().any(|t| keywords.contains(&t.as_str())))
        .map(|(concept, _)| concept.to_string())
        .collect()
}

/// Tokens longer than two characters starting with an uppercase letter,
/// in question order, original casing, duplicates kept.
pub fn match_entities(question: &str) -> Vec<String> {
    question
        .split_whitespace()
        .filter(|t| t.chars().count() > 2)
        .filter(|t| t.chars().next().is_some_and(char::is_uppercase))
        .map(str::to_string)
        .collect()
}
