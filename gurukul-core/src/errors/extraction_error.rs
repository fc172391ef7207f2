/// Verse extraction errors. Never fatal: a failing fragment is skipped and
/// a failing strategy hands over to the next one.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("response does not match the {shape} shape")]
    UnrecognizedShape { shape: String },

    #[error("malformed fragment at {location}: {reason}")]
    MalformedFragment { location: String, reason: String },

    #[error("empty fragment at {location}")]
    EmptyFragment { location: String },
}
