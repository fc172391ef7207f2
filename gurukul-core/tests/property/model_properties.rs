//! Property tests for gurukul-core models: relevance bounds and the cluster
//! running-max invariant.

use proptest::prelude::*;

use gurukul_core::{CandidateVerse, Cluster, ScoredVerse};

fn candidate(reference: &str) -> CandidateVerse {
    CandidateVerse {
        reference: reference.to_string(),
        sanskrit: String::new(),
        translation: String::new(),
        interpretation: String::new(),
        themes: vec!["karma".to_string()],
        fragment: String::new(),
    }
}

proptest! {
    #[test]
    fn scored_relevance_is_always_bounded(r in any::<f64>()) {
        let scored = ScoredVerse::new(candidate("v"), r);
        prop_assert!((0.0..=1.0).contains(&scored.relevance));
    }

    #[test]
    fn cluster_tracks_running_max(relevances in prop::collection::vec(0.0_f64..=1.0, 1..50)) {
        let mut cluster = Cluster::new("karma");
        for (i, r) in relevances.iter().enumerate() {
            cluster.push(ScoredVerse::new(candidate(&format!("v{i}")), *r));
            let max = cluster.verses.iter().map(|v| v.relevance).fold(0.0_f64, f64::max);
            prop_assert_eq!(cluster.relevance, max);
        }
        prop_assert_eq!(cluster.verses.len(), relevances.len());
    }

    #[test]
    fn add_theme_never_duplicates(tags in prop::collection::vec("[a-z]{1,6}", 0..20)) {
        let mut verse = candidate("v");
        verse.themes.clear();
        for tag in &tags {
            verse.add_theme(tag);
        }
        let mut unique = verse.themes.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), verse.themes.len());
    }
}
