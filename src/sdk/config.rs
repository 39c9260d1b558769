//! Client configuration

use crate::sdk::errors::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Environment variable holding the API base URL
pub const API_URL_ENV: &str = "API_URL";

/// Base URL used when `API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every request path is appended to
    pub base_url: String,
    /// Per-request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
            user_agent: format!("catalog-seeder/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Read the base URL from `API_URL`, falling back to the local default
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    /// Settings
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Parse and check the base URL. Only `http` and `https` are accepted.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(self.base_url.trim()).map_err(|e| {
            ClientError::Config(format!("Invalid base URL {}: {}", self.base_url, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ClientError::Config(format!(
                "Unsupported URL scheme '{}' in {}",
                other, self.base_url
            ))),
        }
    }
}
