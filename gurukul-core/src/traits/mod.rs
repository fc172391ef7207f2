mod retrieval_backend;

pub use retrieval_backend::{AnswerSpec, BackendQuery, IRetrievalBackend};
