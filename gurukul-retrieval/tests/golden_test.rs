//! Fixture-driven extraction tests.
//!
//! Each payload under `test-fixtures/retrieval/` is run through the default
//! extraction chain and compared with the strategy and references it
//! declares.

use std::collections::HashMap;

use gurukul_core::constants::{INTERPRETATION_SENTINEL, TRANSLATION_SENTINEL};
use gurukul_retrieval::{SemanticAnalyzer, VerseExtractor};
use test_fixtures::{list_fixtures, load_backend_fixture};

fn run_fixture(name: &str) {
    let fixture = load_backend_fixture(name);
    let profile = SemanticAnalyzer::new().analyze(&fixture.question, &HashMap::new());
    let outcome = VerseExtractor::default().extract(&fixture.payload, &profile);

    assert_eq!(
        outcome.strategy, fixture.expected.strategy,
        "{name}: wrong strategy"
    );
    let references: Vec<&str> = outcome.verses.iter().map(|v| v.reference.as_str()).collect();
    assert_eq!(references, fixture.expected.references, "{name}: wrong references");
    for verse in &outcome.verses {
        assert!(!verse.themes.is_empty(), "{name}: {} has no themes", verse.reference);
    }
}

#[test]
fn golden_structured_answer() {
    run_fixture("structured_answer");
}

#[test]
fn golden_free_text_answer() {
    run_fixture("free_text_answer");
}

#[test]
fn golden_malformed() {
    run_fixture("malformed");
}

#[test]
fn golden_unrecognized_shape() {
    run_fixture("unrecognized_shape");
}

#[test]
fn every_fixture_has_a_test() {
    let names: Vec<String> = list_fixtures("retrieval")
        .iter()
        .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(String::from))
        .collect();
    for name in &names {
        run_fixture(name);
    }
    assert_eq!(names.len(), 4);
}

#[test]
fn structured_fields_follow_labels_or_sentinels() {
    let fixture = load_backend_fixture("structured_answer");
    let profile = SemanticAnalyzer::new().analyze(&fixture.question, &HashMap::new());
    let verses = VerseExtractor::default().extract(&fixture.payload, &profile).verses;

    let gita = &verses[0];
    assert_eq!(gita.sanskrit, "karmaṇy evādhikāras te mā phaleṣu kadācana");
    assert_eq!(
        gita.translation,
        "You have a right to your actions, never to their fruits."
    );
    assert_eq!(
        gita.interpretation,
        "Duty done without attachment is the root of inner peace."
    );

    let katha = &verses[1];
    assert_eq!(katha.sanskrit, "śāntiḥ śāntiḥ śāntiḥ");
    assert_eq!(katha.translation, "Peace, peace, peace.");
    assert_eq!(katha.interpretation, INTERPRETATION_SENTINEL);
    assert_ne!(katha.translation, TRANSLATION_SENTINEL);
}
