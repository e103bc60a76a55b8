//! Plugin configuration.
//!
//! The calculation itself takes no settings; this only covers how results
//! are presented to the launcher.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::items::DEFAULT_ICON;

/// Settings read from `config.toml`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginConfig {
    /// Icon attached to every result, relative to the plugin directory.
    pub icon_path: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            icon_path: DEFAULT_ICON.to_string(),
        }
    }
}

impl PluginConfig {
    /// Load from an explicit path, or from the user config directory if a
    /// file exists there, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

/// `<config dir>/whentoexpect/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("whentoexpect").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        assert_eq!(PluginConfig::default().icon_path, "icon/expect.png");
        let config: PluginConfig = toml::from_str("").unwrap();
        assert_eq!(config, PluginConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "icon_path = \"images/dice.png\"").unwrap();

        let config = PluginConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.icon_path, "images/dice.png");
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "colour = \"blue\"").unwrap();

        let err = PluginConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(PluginConfig::load(Some(&path)).is_err());
    }
}
