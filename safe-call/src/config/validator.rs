use crate::config::types::SafeCallConfig;
use crate::error::{Result, SafeCallError};
use crate::traits::ConfigValidator;
use std::path::Path;

/// Upper bound accepted for `timeout_seconds`
const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Configuration validator implementation
pub struct ConfigValidatorImpl;

impl ConfigValidator for ConfigValidatorImpl {
    type Config = SafeCallConfig;

    /// Validate configuration (uses enhanced validation with default context)
    fn validate(&self, config: &SafeCallConfig) -> Result<()> {
        self.validate_with_context(config, "configuration")
    }
}

impl ConfigValidatorImpl {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validation with enhanced error context
    pub fn validate_with_context<P: AsRef<Path>>(
        &self,
        config: &SafeCallConfig,
        config_path: P,
    ) -> Result<()> {
        let config_path_str = config_path.as_ref().to_string_lossy();
        let transport = &config.transport;

        match url::Url::parse(&transport.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(SafeCallError::invalid_config(format!(
                    "Unsupported scheme '{}' for base_url in {}. Use http or https.",
                    url.scheme(),
                    config_path_str
                )));
            }
            Err(_) => {
                return Err(SafeCallError::invalid_config(format!(
                    "Invalid base_url '{}' in {}. Must be a valid URL.",
                    transport.base_url, config_path_str
                )));
            }
        }

        if let Some(timeout) = transport.timeout_seconds {
            if timeout == 0 || timeout > MAX_TIMEOUT_SECONDS {
                return Err(SafeCallError::invalid_config(format!(
                    "timeout_seconds must be between 1 and {} seconds",
                    MAX_TIMEOUT_SECONDS
                )));
            }
        }

        if let Some(headers) = &transport.headers {
            if let Some(name) = headers.keys().find(|name| name.trim().is_empty()) {
                return Err(SafeCallError::invalid_config(format!(
                    "Empty header name '{}' in [transport.headers] of {}",
                    name, config_path_str
                )));
            }
        }

        Ok(())
    }
}

impl Default for ConfigValidatorImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl SafeCallConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ConfigValidatorImpl::new().validate(self)
    }
}
