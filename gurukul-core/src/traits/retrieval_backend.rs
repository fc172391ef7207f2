use serde::{Deserialize, Serialize};

use crate::errors::GurukulResult;

/// Answer-generation settings forwarded to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerSpec {
    pub include_citations: bool,
    pub preamble: String,
}

/// One query against the search/answer backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendQuery {
    pub text: String,
    pub session: Option<String>,
    pub filter: Option<String>,
    pub answer_spec: AnswerSpec,
}

/// Search/answer backend. Returns the raw response document; its shape is
/// the backend's business and extraction deals with it.
pub trait IRetrievalBackend: Send + Sync {
    fn search(&self, query: &BackendQuery) -> GurukulResult<serde_json::Value>;

    /// Backend name for logs.
    fn name(&self) -> &str;
}
