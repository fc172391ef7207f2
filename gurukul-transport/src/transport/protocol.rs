//! Versioned wire protocol for the answer endpoint.

use chrono::{DateTime, Utc};
use gurukul_core::traits::BackendQuery;
use serde::{Deserialize, Serialize};

/// Current protocol version.
pub const PROTOCOL_VERSION: &str = "1.0";

/// Body of an answer request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub query: QueryText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub page_size: usize,
    pub answer_generation_spec: AnswerGenerationSpec,
    /// Unique request ID for tracing.
    pub request_id: String,
    pub protocol_version: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryText {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerGenerationSpec {
    pub include_citations: bool,
    pub prompt_spec: PromptSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptSpec {
    pub preamble: String,
}

impl AnswerRequest {
    /// Build a request envelope with a fresh request ID.
    pub fn new(query: &BackendQuery, page_size: usize) -> Self {
        Self {
            query: QueryText {
                text: query.text.clone(),
            },
            session: query.session.clone(),
            filter: query.filter.clone(),
            page_size,
            answer_generation_spec: AnswerGenerationSpec {
                include_citations: query.answer_spec.include_citations,
                prompt_spec: PromptSpec {
                    preamble: query.answer_spec.preamble.clone(),
                },
            },
            request_id: uuid::Uuid::new_v4().to_string(),
            protocol_version: PROTOCOL_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}
