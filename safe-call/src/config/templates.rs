use crate::error::{Result, SafeCallError};
use std::fs;
use std::path::Path;

/// Generate default safe-call.toml template with examples
pub fn generate_default_config_template() -> String {
    r#"# Safe Call Configuration
# Settings used when probing a remote API

[transport]
# Base URL every request path is joined onto
base_url = "https://api.example.com"
# Request timeout in seconds (1-300)
timeout_seconds = 30
# Whether to follow HTTP redirects
follow_redirects = true

# Headers applied to all requests
[transport.headers]
"User-Agent" = "safe-call/1.0"
"Accept" = "application/json"
"#
    .to_string()
}

/// Write the default config unless a file already exists and `overwrite` is false.
///
/// Returns whether a file was written.
pub fn ensure_config_file_exists<P: AsRef<Path>>(config_path: P, overwrite: bool) -> Result<bool> {
    let path = config_path.as_ref();

    if path.exists() && !overwrite {
        return Ok(false);
    }

    fs::write(path, generate_default_config_template()).map_err(SafeCallError::Io)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SafeCallConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_is_valid_config() {
        let config: SafeCallConfig = toml::from_str(&generate_default_config_template()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.transport.timeout_seconds, Some(30));
    }

    #[test]
    fn test_existing_file_is_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("safe-call.toml");
        fs::write(&path, "# mine").unwrap();

        assert!(!ensure_config_file_exists(&path, false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

        assert!(ensure_config_file_exists(&path, true).unwrap());
        assert!(fs::read_to_string(&path).unwrap().contains("[transport]"));
    }

    #[test]
    fn test_missing_file_is_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("safe-call.toml");

        assert!(ensure_config_file_exists(&path, false).unwrap());
        assert!(SafeCallConfig::load_with_validation(&path).is_ok());
    }
}
