//! Free-text answer shape: one synthesized answer split on verse separators.

use gurukul_core::errors::ExtractionError;
use gurukul_core::{CandidateVerse, SemanticProfile};
use serde_json::Value;

use super::fields::extract_fields;
use super::ExtractionStrategy;

/// Separator between verses in a synthesized answer.
pub const VERSE_SEPARATOR: &str = "---";

/// Splits `answer.answerText` (or a top-level `answerText`) into fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeTextStrategy;

impl FreeTextStrategy {
    fn answer_text(raw: &Value) -> Option<&str> {
        raw.pointer("/answer/answerText")
            .or_else(|| raw.get("answerText"))
            .and_then(Value::as_str)
    }
}

impl ExtractionStrategy for FreeTextStrategy {
    fn name(&self) -> &'static str {
        "free_text"
    }

    fn extract(
        &self,
        raw: &Value,
        profile: &SemanticProfile,
    ) -> Result<Vec<CandidateVerse>, ExtractionError> {
        let text = Self::answer_text(raw).ok_or_else(|| ExtractionError::UnrecognizedShape {
            shape: self.name().to_string(),
        })?;

        let mut verses = Vec::new();
        for (i, fragment) in text.split(VERSE_SEPARATOR).enumerate() {
            let location = format!("answerText[{i}]");
            match extract_fields(fragment, None, &location, profile) {
                Ok(verse) => verses.push(verse),
                Err(e) => gurukul_observability::tracing_setup::events::fragment_skipped(
                    &location,
                    &e.to_string(),
                ),
            }
        }
        Ok(verses)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;
    use crate::analysis::SemanticAnalyzer;

    fn profile() -> SemanticProfile {
        SemanticAnalyzer::new().analyze("Why is there suffering?", &HashMap::new())
    }

    #[test]
    fn splits_on_separator() {
        let raw = json!({ "answer": { "answerText":
            "Here is what the texts say.\n---\nBhagavad Gita, Verse 2.14\nSanskrit Transliteration: mātrāsparśās tu kaunteya\nTranslation: Contacts of the senses come and go.\n---\nClosing words."
        } });
        let verses = FreeTextStrategy.extract(&raw, &profile()).unwrap();
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].reference, "Bhagavad Gita, Verse 2.14");
        assert_eq!(verses[0].translation, "Contacts of the senses come and go.");
    }

    #[test]
    fn top_level_answer_text_is_accepted() {
        let raw = json!({ "answerText": "Rig Veda 1.32.1 indraṃ vidātha" });
        assert_eq!(FreeTextStrategy.extract(&raw, &profile()).unwrap().len(), 1);
    }

    #[test]
    fn missing_text_is_unrecognized() {
        let raw = json!({ "answer": { "answerText": 7 } });
        assert!(matches!(
            FreeTextStrategy.extract(&raw, &profile()),
            Err(ExtractionError::UnrecognizedShape { .. })
        ));
    }
}
