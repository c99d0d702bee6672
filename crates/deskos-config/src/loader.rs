//! TOML config loading: read from a path or the platform default.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use deskos_common::ConfigError;

use crate::schema::DeskosConfig;
use crate::validation;

/// The platform-specific default config file path
/// (`~/.config/deskos/config.toml` on Linux).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("deskos").join("config.toml"))
}

/// Load config from a specific TOML file.
///
/// Missing fields fall back to serde defaults. A failed validation is
/// logged as a warning and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<DeskosConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|_| ConfigError::FileNotFound(path.to_path_buf()))?;

    let config: DeskosConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path; when no file exists, write a
/// default one there and return defaults.
pub fn load_default() -> Result<DeskosConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            if let Err(e) = write_default_config(&path) {
                warn!("could not write default config: {e}");
            }
            Ok(DeskosConfig::default())
        }
        Err(e) => Err(e),
    }
}

fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let content = toml::to_string_pretty(&DeskosConfig::default())
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_missing_path_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_from_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[desktop]\nicon_rows = 4\n").unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.desktop.icon_rows, 4);
        assert_eq!(config.taskbar.clock_format, "%H:%M");
    }

    #[test]
    fn load_from_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[desktop\nbroken").unwrap();

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn invalid_values_still_load_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ai]\ntemperature = 9.0\n").unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.ai.temperature, 9.0);
    }

    #[test]
    fn default_config_file_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deskos").join("config.toml");
        write_default_config(&path).unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.theme.background, "#1a2330");
    }
}
