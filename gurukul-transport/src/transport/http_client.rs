//! HTTP client with retry, exponential backoff, timeout, and gzip compression.

use std::time::Duration;

use gurukul_core::config::BackendConfig;
use gurukul_core::errors::{GurukulError, GurukulResult, RetrievalError};
use serde::Serialize;

use super::retry::RetryPolicy;

/// Configuration for the HTTP transport layer.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Full URL of the answer endpoint.
    pub endpoint_url: String,
    /// Per-attempt request timeout.
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: String::new(),
            timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
        }
    }
}

impl HttpClientConfig {
    /// Build from backend config. A missing endpoint is a configuration error.
    pub fn from_backend_config(config: &BackendConfig) -> GurukulResult<Self> {
        let endpoint_url = config
            .endpoint_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| GurukulError::Configuration {
                reason: "backend.endpoint_url is not set".to_string(),
            })?;

        Ok(Self {
            endpoint_url,
            timeout: Duration::from_millis(config.timeout_ms),
            retry: RetryPolicy::from_config(config),
        })
    }
}

/// Map a non-success HTTP status to an error.
///
/// 401/403 are authentication failures and never retried. 408, 429 and 5xx
/// are transient. Any other status is a permanent API error.
pub fn classify_status(status: u16, body: String) -> GurukulError {
    match status {
        401 | 403 => GurukulError::Authentication {
            reason: format!("HTTP {status}: {body}"),
        },
        408 | 429 | 500..=599 => RetrievalError::BackendApi {
            status,
            body,
            retryable: true,
        }
        .into(),
        _ => RetrievalError::BackendApi {
            status,
            body,
            retryable: false,
        }
        .into(),
    }
}

/// Parse a response body. Bodies that are not JSON come back as a JSON string
/// so extraction can still run its chain and fall through.
pub fn parse_body(text: String) -> serde_json::Value {
    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "backend body is not JSON; passing it through as text");
            serde_json::Value::String(text)
        }
    }
}

/// HTTP transport client. Wraps reqwest (when the `http` feature is
/// enabled) with retry logic and backoff.
#[derive(Debug)]
pub struct HttpClient {
    config: HttpClientConfig,
    bearer_token: Option<String>,
    #[cfg(feature = "http")]
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> GurukulResult<Self> {
        #[cfg(feature = "http")]
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .map_err(|e| GurukulError::Configuration {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            config,
            bearer_token: None,
            #[cfg(feature = "http")]
            client,
        })
    }

    /// Set the bearer token for authenticated requests.
    pub fn set_bearer_token(&mut self, token: String) {
        self.bearer_token = Some(token);
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// POST a JSON body to the endpoint with retry and backoff.
    pub fn post_json<Req: Serialize>(&self, payload: &Req) -> GurukulResult<serde_json::Value> {
        self.config
            .retry
            .run(|_attempt| self.send_once(payload), std::thread::sleep)
    }

    #[cfg(feature = "http")]
    fn send_once<Req: Serialize>(&self, payload: &Req) -> GurukulResult<serde_json::Value> {
        let timeout_ms = self.config.timeout.as_millis() as u64;

        let mut req = self.client.post(&self.config.endpoint_url).json(payload);
        if let Some(ref token) = self.bearer_token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().map_err(|e| {
            if e.is_timeout() {
                RetrievalError::Timeout { timeout_ms }.into()
            } else {
                GurukulError::from(RetrievalError::Network {
                    reason: e.to_string(),
                })
            }
        })?;

        let status = resp.status();
        let body = resp.text().map_err(|e| {
            if e.is_timeout() {
                GurukulError::from(RetrievalError::Timeout { timeout_ms })
            } else {
                RetrievalError::Network {
                    reason: format!("failed to read body: {e}"),
                }
                .into()
            }
        })?;

        if status.is_success() {
            Ok(parse_body(body))
        } else {
            Err(classify_status(status.as_u16(), body))
        }
    }

    #[cfg(not(feature = "http"))]
    fn send_once<Req: Serialize>(&self, _payload: &Req) -> GurukulResult<serde_json::Value> {
        Err(GurukulError::Configuration {
            reason: "http feature not enabled".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_are_fatal() {
        assert!(classify_status(401, String::new()).is_fatal());
        assert!(classify_status(403, String::new()).is_fatal());
    }

    #[test]
    fn server_and_throttle_statuses_are_transient() {
        for status in [408, 429, 500, 502, 503, 504] {
            let err = classify_status(status, "oops".into());
            assert!(err.is_transient(), "{status} should be transient");
            assert!(!err.is_fatal());
        }
    }

    #[test]
    fn other_client_errors_are_permanent_but_not_fatal() {
        let err = classify_status(404, "no such engine".into());
        assert!(!err.is_transient());
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("no such engine"));
    }

    #[test]
    fn non_json_body_becomes_string_value() {
        let v = parse_body("<html>gateway</html>".to_string());
        assert_eq!(v, serde_json::Value::String("<html>gateway</html>".into()));
        let v = parse_body(r#"{"answer": {}}"#.to_string());
        assert!(v.get("answer").is_some());
    }

    #[test]
    fn missing_endpoint_is_configuration_error() {
        let err = HttpClientConfig::from_backend_config(&BackendConfig::default()).unwrap_err();
        assert!(matches!(err, GurukulError::Configuration { .. }));
    }

    #[test]
    fn config_carries_timeout_and_retry() {
        let backend = BackendConfig {
            endpoint_url: Some("https://answer.example.com".into()),
            timeout_ms: 1234,
            max_attempts: 2,
            ..Default::default()
        };
        let cfg = HttpClientConfig::from_backend_config(&backend).unwrap();
        assert_eq!(cfg.timeout, Duration::from_millis(1234));
        assert_eq!(cfg.retry.max_attempts, 2);
    }
}
