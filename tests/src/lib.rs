//! Helpers shared by the cross-crate integration tests

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write a `safe-call.toml` pointing at `base_url` into `dir`
pub fn write_config(dir: &Path, base_url: &str, extra: &str) -> io::Result<PathBuf> {
    let path = dir.join("safe-call.toml");
    let content = format!(
        r#"# Integration test configuration
[transport]
base_url = "{base_url}"
timeout_seconds = 5
follow_redirects = true
{extra}
"#
    );
    fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use safe_call::SafeCallConfig;
    use tempfile::TempDir;

    #[test]
    fn test_written_config_is_valid() {
        let dir = TempDir::new().unwrap();
        let path = write_config(dir.path(), "http://127.0.0.1:9", "").unwrap();

        let config = SafeCallConfig::load_with_validation(path).unwrap();
        assert_eq!(config.transport.timeout_seconds, Some(5));
    }
}
