/// Relevance scoring errors. A verse whose score fails is kept with relevance 0.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("non-finite {factor} score for {reference}")]
    NonFiniteScore { factor: String, reference: String },
}
