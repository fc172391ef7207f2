mod cluster;
mod collect;
mod degradation_event;
mod enhanced_query;
mod semantic_profile;
mod verse;

pub use cluster::Cluster;
pub use collect::{
    ClusterPayload, CollectOptions, CollectRequest, CollectResponse, QuerySummary,
    ResponseMetadata, VersePayload,
};
pub use degradation_event::DegradationEvent;
pub use enhanced_query::EnhancedQuery;
pub use semantic_profile::SemanticProfile;
pub use verse::{CandidateVerse, ScoredVerse};
