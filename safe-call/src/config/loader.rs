use crate::config::types::SafeCallConfig;
use crate::error::{Result, SafeCallError};
use std::path::Path;

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SafeCallConfig>;
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<SafeCallConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from a safe-call.toml file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SafeCallConfig> {
        let content = std::fs::read_to_string(&path).map_err(|_| SafeCallError::ConfigNotFound {
            path: path.as_ref().to_path_buf(),
        })?;

        let config: SafeCallConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with enhanced error context, then validate it
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<SafeCallConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(SafeCallError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)?;

        let config: SafeCallConfig = toml::from_str(&content).map_err(|e| {
            SafeCallError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        crate::config::ConfigValidatorImpl::new().validate_with_context(&config, path_ref)?;
        Ok(config)
    }
}

// Convenience functions maintaining the API
impl SafeCallConfig {
    /// Load configuration from a safe-call.toml file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load and validate configuration
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_with_validation(path)
    }
}
