use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Main configuration structure, read from `safe-call.toml`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SafeCallConfig {
    /// Transport settings for the remote API
    pub transport: TransportConfig,
}

/// Settings for the HTTP transport
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransportConfig {
    /// Base URL every request path is joined onto
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Whether to follow redirects
    pub follow_redirects: Option<bool>,
    /// Headers applied to every request
    pub headers: Option<HashMap<String, String>>,
}

impl TransportConfig {
    /// Transport settings with defaults for everything but the base URL
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_seconds: None,
            follow_redirects: None,
            headers: None,
        }
    }
}
