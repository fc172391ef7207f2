//! Property tests for the verse pipeline: query enhancement, extraction
//! fallback, score bounds, filtering and clustering invariants.

use std::collections::HashMap;

use proptest::prelude::*;
use serde_json::{json, Value};

use gurukul_core::{CandidateVerse, ScoredVerse, SemanticProfile};
use gurukul_retrieval::extraction::fallback::seed_verses;
use gurukul_retrieval::extraction::fields::extract_fields;
use gurukul_retrieval::{
    cluster_verses, enhance_query, extract_verses, filter_verses, RelevanceScorer,
    SemanticAnalyzer,
};

fn analyze(q: &str) -> SemanticProfile {
    SemanticAnalyzer::new().analyze(q, &HashMap::new())
}

fn verse(reference: String, themes: Vec<String>, relevance: f64) -> ScoredVerse {
    ScoredVerse::new(
        CandidateVerse {
            reference,
            sanskrit: String::new(),
            translation: String::new(),
            interpretation: String::new(),
            themes,
            fragment: String::new(),
        },
        relevance,
    )
}

fn unrecognized_payload() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        ".*".prop_map(Value::String),
        ("[a-zA-Z]{1,12}", any::<i32>()).prop_map(|(k, v)| {
            let mut map = serde_json::Map::new();
            map.insert(k, json!(v));
            Value::Object(map)
        }),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(|v| json!(v)),
    ]
}

fn scored_verses() -> impl Strategy<Value = Vec<ScoredVerse>> {
    let themes = prop::sample::subsequence(vec!["karma", "dharma", "peace", "agni"], 1..=3);
    prop::collection::vec((themes, 0.0_f64..=1.0), 0..30).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (themes, r))| {
                verse(
                    format!("v{i}"),
                    themes.into_iter().map(String::from).collect(),
                    r,
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn enhanced_query_is_deterministic_and_non_empty(q in ".*") {
        let first = enhance_query(&analyze(&q));
        let second = enhance_query(&analyze(&q));
        prop_assert!(!first.is_empty());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unrecognized_payloads_give_filtered_seeds(payload in unrecognized_payload(), q in "[a-zA-Z ]{0,40}") {
        let profile = analyze(&q);
        let verses = extract_verses(&payload, &profile);
        prop_assert_eq!(verses, seed_verses(&profile));
    }

    #[test]
    fn scores_stay_in_unit_interval(fragment in ".{0,200}", q in ".{0,80}") {
        let profile = analyze(&q);
        let score = RelevanceScorer::default()
            .score_fragment(&fragment, &profile, &q, "r")
            .unwrap();
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn filtering_is_idempotent(verses in scored_verses(), min in 0.0_f64..=1.0, k in 1usize..10) {
        let (once, _) = filter_verses(verses, min, k);
        let (twice, report) = filter_verses(once.clone(), min, k);
        prop_assert_eq!(once, twice);
        prop_assert!(report.dropped.is_empty());
    }

    #[test]
    fn filter_keeps_input_order(verses in scored_verses(), min in 0.0_f64..=1.0, k in 1usize..10) {
        let (kept, _) = filter_verses(verses, min, k);
        prop_assert!(kept.len() <= k);
        let indices: Vec<usize> = kept
            .iter()
            .map(|v| v.verse.reference[1..].parse().unwrap())
            .collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(kept.iter().all(|v| v.relevance >= min));
    }

    #[test]
    fn cluster_invariants_hold(verses in scored_verses()) {
        let clusters = cluster_verses(&verses);

        let mut discovery: Vec<&str> = Vec::new();
        for v in &verses {
            for t in &v.verse.themes {
                if !discovery.contains(&t.as_str()) {
                    discovery.push(t.as_str());
                }
            }
        }
        prop_assert_eq!(clusters.len(), discovery.len());

        for cluster in &clusters {
            let max = cluster.verses.iter().map(|v| v.relevance).fold(0.0_f64, f64::max);
            prop_assert_eq!(cluster.relevance, max);
        }
        for pair in clusters.windows(2) {
            prop_assert!(pair[0].relevance >= pair[1].relevance);
            if pair[0].relevance == pair[1].relevance {
                let a = discovery.iter().position(|t| *t == pair[0].theme).unwrap();
                let b = discovery.iter().position(|t| *t == pair[1].theme).unwrap();
                prop_assert!(a < b);
            }
        }
    }

    #[test]
    fn labelled_fields_are_exact(
        sanskrit in "[a-zāīūṃḥś ]{1,30}",
        translation in "[A-Za-z ,.]{1,40}",
        interpretation in "[A-Za-z ,.]{1,40}",
    ) {
        prop_assume!(!sanskrit.trim().is_empty());
        prop_assume!(!translation.trim().is_empty());
        prop_assume!(!interpretation.trim().is_empty());
        let fragment = format!(
            "Sanskrit Transliteration: {sanskrit}\nTranslation: {translation}\nInterpretation: {interpretation}"
        );
        let verse = extract_fields(&fragment, None, "p", &analyze("peace")).unwrap();
        prop_assert_eq!(verse.sanskrit, sanskrit.trim());
        prop_assert_eq!(verse.translation, translation.trim());
        prop_assert_eq!(verse.interpretation, interpretation.trim());
    }
}
