use crate::error::Result;
use crate::ui;
use dialoguer::{theme::ColorfulTheme, Confirm};
use safe_call::config::ensure_config_file_exists;
use std::path::Path;

pub fn execute(config_path: String, force: bool) -> Result<()> {
    ui::section_header("safe-call init");

    let path = Path::new(&config_path);
    let overwrite = if path.exists() && !force {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} already exists. Overwrite it?", path.display()))
            .default(false)
            .interact()?
    } else {
        true
    };

    write_config(path, overwrite)
}

fn write_config(path: &Path, overwrite: bool) -> Result<()> {
    if ensure_config_file_exists(path, overwrite)? {
        ui::success_message(&format!("Wrote {}", path.display()));
        ui::info_message("Edit base_url, then run `safe-call probe <PATH>`");
    } else {
        ui::info_message(&format!("Kept existing {}", path.display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_force_writes_without_prompt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("safe-call.toml");
        fs::write(&path, "# old").unwrap();

        execute(path.to_string_lossy().into_owned(), true).unwrap();

        assert!(fs::read_to_string(&path).unwrap().contains("[transport]"));
    }

    #[test]
    fn test_existing_file_kept_when_declined() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("safe-call.toml");
        fs::write(&path, "# old").unwrap();

        write_config(&path, false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# old");
    }
}
