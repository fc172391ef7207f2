//! Upstream request/response contract, serialized in camelCase for the web UI.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::cluster::Cluster;
use super::degradation_event::DegradationEvent;
use super::enhanced_query::EnhancedQuery;
use super::verse::ScoredVerse;

/// A question to answer with verses.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CollectRequest {
    pub question: String,
    #[serde(default)]
    pub context: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub options: CollectOptions,
    /// Caller session id, echoed back in the response.
    #[serde(default)]
    pub session_id: Option<String>,
}

impl CollectRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            context: HashMap::new(),
            options: CollectOptions::default(),
            session_id: None,
        }
    }
}

/// Per-request overrides of the configured filter settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CollectOptions {
    pub min_relevance: Option<f64>,
    pub top_k: Option<usize>,
}

/// Ranked clusters plus request metadata.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CollectResponse {
    pub session_id: Option<String>,
    pub clusters: Vec<ClusterPayload>,
    pub metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ClusterPayload {
    pub theme: String,
    pub relevance: f64,
    pub verses: Vec<VersePayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VersePayload {
    pub reference: String,
    pub sanskrit: String,
    pub translation: String,
    pub interpretation: String,
    pub relevance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub total_clusters: usize,
    /// Distinct verses after filtering, not cluster memberships.
    pub total_verses: usize,
    /// Wall-clock pipeline time in milliseconds.
    #[ts(type = "number")]
    pub processing_time: u64,
    pub correlation_id: String,
    pub query: QuerySummary,
    pub collection_time: DateTime<Utc>,
    pub collector_version: String,
    pub degradations: Vec<DegradationEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuerySummary {
    pub original: String,
    pub enhanced: EnhancedQuery,
}

impl From<&ScoredVerse> for VersePayload {
    fn from(v: &ScoredVerse) -> Self {
        Self {
            reference: v.verse.reference.clone(),
            sanskrit: v.verse.sanskrit.clone(),
            translation: v.verse.translation.clone(),
            interpretation: v.verse.interpretation.clone(),
            relevance: v.relevance,
        }
    }
}

impl From<&Cluster> for ClusterPayload {
    fn from(c: &Cluster) -> Self {
        Self {
            theme: c.theme.clone(),
            relevance: c.relevance,
            verses: c.verses.iter().map(VersePayload::from).collect(),
        }
    }
}
