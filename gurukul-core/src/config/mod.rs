//! Top-level configuration with layered resolution.

pub mod backend_config;
pub mod defaults;
pub mod observability_config;
pub mod retrieval_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use backend_config::BackendConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`GURUKUL_*`)
/// 2. TOML file passed to [`GurukulConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GurukulConfig {
    pub retrieval: RetrievalConfig,
    pub backend: BackendConfig,
    pub observability: ObservabilityConfig,
}

impl GurukulConfig {
    /// Load configuration from an optional TOML file plus the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => {
                let content =
                    std::fs::read_to_string(p).map_err(|_| ConfigError::FileNotFound {
                        path: p.display().to_string(),
                    })?;
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: p.display().to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };

        config.apply_env_overrides_from(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `GURUKUL_*` overrides read through `lookup`.
    /// Unparseable values are ignored and the previous value is kept.
    pub fn apply_env_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("GURUKUL_MIN_RELEVANCE").and_then(|v| v.parse::<f64>().ok()) {
            self.retrieval.min_relevance = v;
        }
        if let Some(v) = lookup("GURUKUL_TOP_K").and_then(|v| v.parse::<usize>().ok()) {
            self.retrieval.top_k = v;
        }
        if let Some(v) = lookup("GURUKUL_BACKEND_ENDPOINT") {
            self.backend.endpoint_url = Some(v);
        }
        if let Some(v) = lookup("GURUKUL_BACKEND_API_KEY") {
            self.backend.api_key = Some(v);
        }
        if let Some(v) = lookup("GURUKUL_TIMEOUT_MS").and_then(|v| v.parse::<u64>().ok()) {
            self.backend.timeout_ms = v;
        }
        if let Some(v) = lookup("GURUKUL_MAX_ATTEMPTS").and_then(|v| v.parse::<u32>().ok()) {
            self.backend.max_attempts = v;
        }
        if let Some(v) = lookup("GURUKUL_LOG_LEVEL") {
            self.observability.log_level = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.retrieval.min_relevance) {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.min_relevance".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if self.retrieval.top_k == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.top_k".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.backend.timeout_ms == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "backend.timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.backend.max_attempts == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "backend.max_attempts".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.backend.page_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "backend.page_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
