//! Error handling

use thiserror::Error;

/// Errors produced by the catalog API client
#[derive(Error, Debug)]
pub enum ClientError {
    /// The connection could not be established or was interrupted
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status outside `200..300`
    #[error("HTTP {status}: {body}")]
    Http {
        /// Response status code
        status: u16,
        /// Raw response body text
        body: String,
    },

    /// A response body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// A request payload could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration (base URL, HTTP client setup)
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Client result type
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// Build an HTTP status error
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// True when no response was received at all
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    /// Status code of an HTTP error, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
