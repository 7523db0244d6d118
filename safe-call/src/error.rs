use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for safe-call operations
pub type Result<T> = std::result::Result<T, SafeCallError>;

/// Error types for safe-call operations.
///
/// Note that remote failures are never reported here: they are classified into
/// [`crate::outcome::Outcome::Failure`]. This enum covers local setup problems and
/// the single contract violation the classifier refuses to absorb, a
/// malformed 422 body.
#[derive(Debug, Error)]
pub enum SafeCallError {
    #[error("Malformed response body: {source}")]
    MalformedBody {
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
}

impl SafeCallError {
    /// Create a new malformed body error
    pub fn malformed_body(source: serde_json::Error) -> Self {
        Self::MalformedBody { source }
    }

    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new invalid request error
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Whether this error is the malformed-body contract violation
    pub fn is_malformed_body(&self) -> bool {
        matches!(self, Self::MalformedBody { .. })
    }
}
