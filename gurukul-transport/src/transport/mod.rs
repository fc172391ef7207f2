//! Transport layer: HTTP client with retry/backoff and versioned wire protocol.

pub mod http_client;
pub mod protocol;
pub mod retry;

pub use http_client::{classify_status, HttpClient, HttpClientConfig};
pub use protocol::{
    AnswerGenerationSpec, AnswerRequest, PromptSpec, QueryText, PROTOCOL_VERSION,
};
pub use retry::RetryPolicy;
