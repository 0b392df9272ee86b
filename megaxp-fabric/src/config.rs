//! Locating and loading `mega-xp-storage.toml`.
//!
//! The file lives in the loader's config directory. A missing file means
//! stock behaviour; a malformed one is a startup error.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use megaxp_core::config::MegaXpConfig;
use megaxp_core::error::{MegaXpError, Result};

/// File name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "mega-xp-storage.toml";

/// Full path of the config file inside `config_dir`.
#[must_use]
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Load the config from `config_dir`, falling back to defaults when the
/// file does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read, parsed or
/// validated.
pub fn load_or_default(config_dir: &Path) -> Result<MegaXpConfig> {
    let path = config_path(config_dir);
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(MegaXpConfig::default());
    }
    let config = MegaXpConfig::from_file(&path)?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Write the default config to `config_dir` unless a file is already there.
///
/// Returns the path of the config file.
///
/// # Errors
/// Returns an error if the directory or file cannot be written.
pub fn write_default(config_dir: &Path) -> Result<PathBuf> {
    let path = config_path(config_dir);
    if path.exists() {
        return Ok(path);
    }
    let body = toml::to_string_pretty(&MegaXpConfig::default())
        .map_err(|e| MegaXpError::Config(e.to_string()))?;
    std::fs::create_dir_all(config_dir)?;
    std::fs::write(&path, body)?;
    info!(path = %path.display(), "wrote default config");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use megaxp_core::config::{CaptureScope, MergePolicy};

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_or_default(dir.path()).unwrap();
        assert!(config.general.enabled);
        assert_eq!(config.capture.scope, CaptureScope::Inventory);
    }

    #[test]
    fn reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            config_path(dir.path()),
            "[capture]\nscope = \"hotbar\"\n[recipes]\nmerge = \"increment\"\n",
        )
        .unwrap();

        let config = load_or_default(dir.path()).unwrap();
        assert_eq!(config.capture.scope, CaptureScope::Hotbar);
        assert_eq!(config.recipes.merge, MergePolicy::Increment);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(config_path(dir.path()), "[transfer]\nlevel_chunk = 0\n").unwrap();
        assert!(matches!(
            load_or_default(dir.path()),
            Err(MegaXpError::Config(_))
        ));
    }

    #[test]
    fn written_default_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("config");
        let path = write_default(&nested).unwrap();
        assert!(path.exists());

        let config = load_or_default(&nested).unwrap();
        assert_eq!(config.recipes.required_count, 64);
        assert_eq!(config.recipes.marker.to_string(), "minecraft:mending");
    }

    #[test]
    fn write_default_keeps_user_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(config_path(dir.path()), "[general]\nenabled = false\n").unwrap();
        write_default(dir.path()).unwrap();
        assert!(!load_or_default(dir.path()).unwrap().general.enabled);
    }
}
