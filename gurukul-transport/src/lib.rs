//! # gurukul-transport
//!
//! Talks to the search/answer backend. The backend is a black box that takes
//! one enhanced query string and returns a JSON document in whatever shape it
//! likes; this crate only gets the document here and back, within a timeout,
//! retrying transient failures with exponential backoff.

pub mod backend;
pub mod transport;

pub use backend::HttpRetrievalBackend;
pub use transport::{HttpClient, HttpClientConfig, RetryPolicy};
