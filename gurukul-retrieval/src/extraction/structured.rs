//! Structured answer shape: steps → actions → observation → search results
//! → snippets/chunks.

use gurukul_core::errors::ExtractionError;
use gurukul_core::{CandidateVerse, SemanticProfile};
use gurukul_observability::tracing_setup::events;
use serde::Deserialize;
use serde_json::Value;

use super::fields::extract_fields;
use super::ExtractionStrategy;

// Each level holds its children as raw values so one malformed sibling is
// skipped on its own instead of failing the whole response.

#[derive(Debug, Default, Deserialize)]
struct Step {
    #[serde(default)]
    actions: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct Action {
    observation: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Observation {
    #[serde(default)]
    search_results: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResult {
    title: Option<Value>,
    #[serde(default)]
    snippet_info: Vec<Value>,
    #[serde(default)]
    chunk_info: Vec<Value>,
}

/// Decode one node of the tree, logging and skipping it when malformed.
fn decode<'a, T: Deserialize<'a>>(value: &'a Value, location: &str) -> Option<T> {
    match T::deserialize(value) {
        Ok(node) => Some(node),
        Err(e) => {
            events::fragment_skipped(location, &e.to_string());
            None
        }
    }
}

/// `answer.steps`, else top-level `steps`.
fn find_steps(raw: &Value) -> Option<&Vec<Value>> {
    raw.pointer("/answer/steps")
        .and_then(Value::as_array)
        .or_else(|| raw.get("steps").and_then(Value::as_array))
}

/// Text of a snippet or chunk entry under `key`. Anything but an object
/// holding a string there is malformed.
fn entry_text<'a>(entry: &'a Value, key: &str, location: &str) -> Result<&'a str, ExtractionError> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| ExtractionError::MalformedFragment {
            location: location.to_string(),
            reason: format!("missing string field `{key}`"),
        })
}

/// Walks the nested search-step structure of an answer response.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredStrategy;

impl StructuredStrategy {
    fn extract_result(
        &self,
        result: &SearchResult,
        location: &str,
        profile: &SemanticProfile,
        verses: &mut Vec<CandidateVerse>,
    ) {
        let title = result.title.as_ref().and_then(Value::as_str);
        let entries = result
            .snippet_info
            .iter()
            .map(|e| (e, "snippet"))
            .chain(result.chunk_info.iter().map(|e| (e, "content")));
        for (i, (entry, key)) in entries.enumerate() {
            let location = format!("{location}.{key}[{i}]");
            let extracted = entry_text(entry, key, &location)
                .and_then(|text| extract_fields(text, title, &location, profile));
            match extracted {
                Ok(verse) => verses.push(verse),
                Err(e) => events::fragment_skipped(&location, &e.to_string()),
            }
        }
    }
}

impl ExtractionStrategy for StructuredStrategy {
    fn name(&self) -> &'static str {
        "structured"
    }

    fn extract(
        &self,
        raw: &Value,
        profile: &SemanticProfile,
    ) -> Result<Vec<CandidateVerse>, ExtractionError> {
        let steps = find_steps(raw).ok_or_else(|| ExtractionError::UnrecognizedShape {
            shape: self.name().to_string(),
        })?;

        let mut verses = Vec::new();
        for (s, step) in steps.iter().enumerate() {
            let location = format!("steps[{s}]");
            let Some(step) = decode::<Step>(step, &location) else {
                continue;
            };
            for (a, action) in step.actions.iter().enumerate() {
                let location = format!("{location}.actions[{a}]");
                let Some(observation) = decode::<Action>(action, &location)
                    .and_then(|action| action.observation)
                else {
                    continue;
                };
                let location = format!("{location}.observation");
                let Some(observation) = decode::<Observation>(&observation, &location) else {
                    continue;
                };
                for (r, result) in observation.search_results.iter().enumerate() {
                    let location = format!("{location}.results[{r}]");
                    if let Some(result) = decode::<SearchResult>(result, &location) {
                        self.extract_result(&result, &location, profile, &mut verses);
                    }
                }
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
        SemanticAnalyzer::new().analyze("How do I find peace?", &HashMap::new())
    }

    #[test]
    fn walks_nested_results() {
        let raw = json!({
            "answer": { "steps": [ { "actions": [
                { "observation": { "searchResults": [ {
                    "title": "Isha Upanishad",
                    "snippetInfo": [
                        { "snippet": "Isha Upanishad Verse 1\nSanskrit Transliteration: īśāvāsyam idaṃ sarvam" },
                        { "snippet": "no verse here" }
                    ],
                    "chunkInfo": [ { "content": "oṃ śāntiḥ śāntiḥ śāntiḥ" } ]
                } ] } },
                { "searchAction": { "query": "ignored" } }
            ] } ] }
        });
        let verses = StructuredStrategy.extract(&raw, &profile()).unwrap();
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0].reference, "Isha Upanishad Verse 1");
        assert_eq!(verses[0].sanskrit, "īśāvāsyam idaṃ sarvam");
        assert_eq!(verses[1].reference, "Isha Upanishad...");
    }

    #[test]
    fn top_level_steps_are_accepted() {
        let raw = json!({ "steps": [ { "actions": [ { "observation": { "searchResults": [
            { "snippetInfo": [ { "snippet": "Rig Veda 1.1.1 agnimīḷe purohitaṃ" } ] }
        ] } } ] } ] });
        let verses = StructuredStrategy.extract(&raw, &profile()).unwrap();
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].reference, "Rig Veda 1.1.1");
    }

    #[test]
    fn malformed_snippets_are_skipped() {
        let raw = json!({ "steps": [ { "actions": [ { "observation": { "searchResults": [
            { "snippetInfo": [ { "snippet": 42 }, "bare", { "snippet": "Rig Veda 1.1.1" } ] }
        ] } } ] } ] });
        let verses = StructuredStrategy.extract(&raw, &profile()).unwrap();
        assert_eq!(verses.len(), 1);
    }

    #[test]
    fn malformed_result_does_not_discard_its_siblings() {
        let raw = json!({ "steps": [ { "actions": [ { "observation": { "searchResults": [
            { "title": "Rig Veda", "snippetInfo": [ { "snippet": "Rig Veda 1.1.1 agnimīḷe purohitaṃ" } ] },
            { "title": 42, "snippetInfo": [ { "snippet": "Rig Veda 1.32.1 indraṃ" } ] }
        ] } } ] } ] });
        let verses = StructuredStrategy.extract(&raw, &profile()).unwrap();
        let refs: Vec<_> = verses.iter().map(|v| v.reference.as_str()).collect();
        assert_eq!(refs, ["Rig Veda 1.1.1", "Rig Veda 1.32.1"]);
    }

    #[test]
    fn malformed_steps_and_actions_are_skipped() {
        let raw = json!({ "answer": { "steps": [
            "not a step",
            { "actions": [
                "not an action",
                { "observation": "not an observation" },
                { "observation": { "searchResults": [
                    { "snippetInfo": [ { "snippet": "Rig Veda 1.1.1 agnimīḷe purohitaṃ" } ] }
                ] } }
            ] }
        ] } });
        let verses = StructuredStrategy.extract(&raw, &profile()).unwrap();
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].reference, "Rig Veda 1.1.1");
    }

    #[test]
    fn other_shapes_are_unrecognized() {
        for raw in [json!(null), json!("text"), json!({ "answer": { "answerText": "x" } })] {
            let err = StructuredStrategy.extract(&raw, &profile()).unwrap_err();
            assert!(matches!(err, ExtractionError::UnrecognizedShape { .. }));
        }
    }
}
