use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Enhanced query sent to the backend, with the expansions that built it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedQuery {
    pub user_query: String,
    pub theme_expansions: Vec<String>,
    pub concept_expansions: Vec<String>,
    pub entity_expansions: Vec<String>,
    /// The string actually sent. Never empty.
    pub final_query_string: String,
    /// Optional backend filter expression.
    pub scoping_filter: Option<String>,
}
