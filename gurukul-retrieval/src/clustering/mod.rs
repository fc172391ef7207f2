//! Theme clustering: one cluster per theme tag, ranked by best member.

use std::collections::HashMap;

use gurukul_core::{Cluster, ScoredVerse};
use gurukul_observability::clustering_span;

/// Distribute verses into theme clusters and rank them.
///
/// A verse with N tags lands in N clusters. Clusters are sorted by relevance
/// descending; ties keep the order in which their themes were first seen.
pub fn cluster_verses(verses: &[ScoredVerse]) -> Vec<Cluster> {
    let span = clustering_span!(verses.len());
    let _guard = span.enter();

    let mut clusters: Vec<Cluster> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for scored in verses {
        for theme in &scored.verse.themes {
            let slot = *index.entry(theme.as_str()).or_insert_with(|| {
                clusters.push(Cluster::new(theme.as_str()));
                clusters.len() - 1
            });
            clusters[slot].push(scored.clone());
        }
    }

    // `sort_by` is stable, so equal relevances keep discovery order.
    clusters.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    tracing::debug!(clusters = clusters.len(), "clustered verses");
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use gurukul_core::CandidateVerse;

    fn verse(reference: &str, themes: &[&str], relevance: f64) -> ScoredVerse {
        ScoredVerse::new(
            CandidateVerse {
                reference: reference.to_string(),
                sanskrit: String::new(),
                translation: String::new(),
                interpretation: String::new(),
                themes: themes.iter().map(|t| t.to_string()).collect(),
                fragment: String::new(),
            },
            relevance,
        )
    }

    #[test]
    fn multi_tag_verse_joins_every_cluster() {
        let verses = vec![
            verse("X", &["karma"], 0.4),
            verse("Y", &["karma", "dharma"], 0.7),
        ];
        let clusters = cluster_verses(&verses);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].theme, "karma");
        assert_eq!(clusters[0].relevance, 0.7);
        assert_eq!(clusters[0].verses.len(), 2);
        assert_eq!(clusters[1].theme, "dharma");
        assert_eq!(clusters[1].relevance, 0.7);
        assert_eq!(clusters[1].verses.len(), 1);
    }

    #[test]
    fn clusters_sorted_by_best_member() {
        let verses = vec![
            verse("a", &["peace"], 0.2),
            verse("b", &["karma"], 0.9),
            verse("c", &["peace"], 0.5),
        ];
        let clusters = cluster_verses(&verses);
        let order: Vec<_> = clusters.iter().map(|c| c.theme.as_str()).collect();
        assert_eq!(order, vec!["karma", "peace"]);
        assert_eq!(clusters[1].relevance, 0.5);
    }

    #[test]
    fn no_verses_no_clusters() {
        assert!(cluster_verses(&[]).is_empty());
    }
}
