//! `IRetrievalBackend` over HTTP.

use gurukul_core::config::BackendConfig;
use gurukul_core::errors::{GurukulError, GurukulResult};
use gurukul_core::traits::{BackendQuery, IRetrievalBackend};

use crate::transport::{AnswerRequest, HttpClient, HttpClientConfig};

/// Answer backend reached over HTTP with a bearer credential.
#[derive(Debug)]
pub struct HttpRetrievalBackend {
    client: HttpClient,
    page_size: usize,
}

impl HttpRetrievalBackend {
    /// Build from configuration. Missing endpoint or credential is fatal.
    pub fn from_config(config: &BackendConfig) -> GurukulResult<Self> {
        let client_config = HttpClientConfig::from_backend_config(config)?;
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| GurukulError::Configuration {
                reason: "backend.api_key is not set".to_string(),
            })?;

        let mut client = HttpClient::new(client_config)?;
        client.set_bearer_token(api_key);

        Ok(Self {
            client,
            page_size: config.page_size,
        })
    }
}

impl IRetrievalBackend for HttpRetrievalBackend {
    fn search(&self, query: &BackendQuery) -> GurukulResult<serde_json::Value> {
        let request = AnswerRequest::new(query, self.page_size);
        tracing::debug!(
            request_id = %request.request_id,
            query_len = query.text.len(),
            "sending answer request"
        );
        self.client.post_json(&request)
    }

    fn name(&self) -> &str {
        "http"
    }
}
