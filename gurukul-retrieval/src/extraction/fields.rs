//! Per-fragment field extraction.

use gurukul_core::constants::{
    INTERPRETATION_SENTINEL, MAX_TITLE_REFERENCE_CHARS, TRANSLATION_SENTINEL,
};
use gurukul_core::errors::ExtractionError;
use gurukul_core::{CandidateVerse, SemanticProfile};

use super::markers::{self, RE_INTERPRETATION_LABEL, RE_SANSKRIT_LABEL, RE_TRANSLATION_LABEL};
use crate::analysis::theme_matches;

/// Reference used when a fragment has Sanskrit text but no locator or title.
pub const UNATTRIBUTED_REFERENCE: &str = "Unattributed verse";

/// Extract one verse from a fragment.
///
/// Each field is attempted independently. A fragment with neither Sanskrit
/// text nor a canonical reference yields `MalformedFragment`; the caller
/// skips it.
pub fn extract_fields(
    fragment: &str,
    title: Option<&str>,
    location: &str,
    profile: &SemanticProfile,
) -> Result<CandidateVerse, ExtractionError> {
    if fragment.trim().is_empty() {
        return Err(ExtractionError::EmptyFragment {
            location: location.to_string(),
        });
    }

    let sanskrit = markers::labelled(&RE_SANSKRIT_LABEL, fragment)
        .or_else(|| markers::longest_sanskrit_run(fragment));
    let reference = markers::find_reference(fragment);

    if sanskrit.is_none() && reference.is_none() {
        return Err(ExtractionError::MalformedFragment {
            location: location.to_string(),
            reason: "no sanskrit text or verse reference".to_string(),
        });
    }

    let reference = reference
        .or_else(|| title.and_then(title_reference))
        .unwrap_or_else(|| UNATTRIBUTED_REFERENCE.to_string());

    let translation = markers::labelled(&RE_TRANSLATION_LABEL, fragment)
        .unwrap_or_else(|| TRANSLATION_SENTINEL.to_string());
    let interpretation = markers::labelled(&RE_INTERPRETATION_LABEL, fragment)
        .unwrap_or_else(|| INTERPRETATION_SENTINEL.to_string());

    let mut themes = theme_matches(fragment);
    if themes.is_empty() {
        themes = profile.themes.clone();
    }

    Ok(CandidateVerse {
        reference,
        sanskrit: sanskrit.unwrap_or_default(),
        translation,
        interpretation,
        themes,
        fragment: fragment.to_string(),
    })
}

/// Reference derived from a document title: the first 50 characters
/// followed by an ellipsis.
pub fn title_reference(title: &str) -> Option<String> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let truncated: String = title.chars().take(MAX_TITLE_REFERENCE_CHARS).collect();
    Some(format!("{}...", truncated.trim_end()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::analysis::SemanticAnalyzer;

    fn profile() -> SemanticProfile {
        SemanticAnalyzer::new().analyze("What is dharma?", &HashMap::new())
    }

    #[test]
    fn labelled_fields_are_taken_verbatim() {
        let fragment = "Bhagavad Gita, Verse 2.47\n\
                        Sanskrit Transliteration:  karmaṇy evādhikāras te mā phaleṣu kadācana \n\
                        Translation: You have a right to action alone, never to its fruits.\n\
                        Interpretation:   Act without attachment to results.";
        let verse = extract_fields(fragment, None, "answer[0]", &profile()).unwrap();
        assert_eq!(verse.reference, "Bhagavad Gita, Verse 2.47");
        assert_eq!(verse.sanskrit, "karmaṇy evādhikāras te mā phaleṣu kadācana");
        assert_eq!(
            verse.translation,
            "You have a right to action alone, never to its fruits."
        );
        assert_eq!(verse.interpretation, "Act without attachment to results.");
        assert_eq!(verse.themes, vec!["karma"]);
    }

    #[test]
    fn missing_labels_use_sentinels() {
        let verse =
            extract_fields("oṃ pūrṇam adaḥ pūrṇam idam", None, "s", &profile()).unwrap();
        assert_eq!(verse.sanskrit, "oṃ pūrṇam adaḥ pūrṇam idam");
        assert_eq!(verse.translation, TRANSLATION_SENTINEL);
        assert_eq!(verse.interpretation, INTERPRETATION_SENTINEL);
        assert_eq!(verse.reference, UNATTRIBUTED_REFERENCE);
        // No theme keyword in the fragment: the profile's themes are used.
        assert_eq!(verse.themes, vec!["dharma"]);
    }

    #[test]
    fn title_fallback_is_truncated() {
        let title = "Commentary on the hymns to the dawn goddess, collected and annotated";
        let verse = extract_fields("uṣo vājena vājini", Some(title), "s", &profile()).unwrap();
        assert_eq!(
            verse.reference,
            "Commentary on the hymns to the dawn goddess, colle..."
        );
    }

    #[test]
    fn reference_alone_is_enough() {
        let verse =
            extract_fields("The creation hymn, Rig Veda 10.129.1", None, "s", &profile()).unwrap();
        assert_eq!(verse.reference, "Rig Veda 10.129.1");
        assert!(verse.sanskrit.is_empty());
    }

    #[test]
    fn plain_prose_is_rejected() {
        let err = extract_fields("Just some english prose.", Some("Title"), "s", &profile())
            .unwrap_err();
        assert!(matches!(err, ExtractionError::MalformedFragment { .. }));
    }

    #[test]
    fn blank_fragment_is_empty() {
        let err = extract_fields("  \n ", None, "s", &profile()).unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyFragment { .. }));
    }
}
