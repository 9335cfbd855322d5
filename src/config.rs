use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Stored credentials for the weather service.
///
/// This is an opt-in convenience layer: the client itself takes its key by
/// injection and never touches the filesystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Example TOML:
    /// api_key = "..."
    pub api_key: Option<String>,
}

impl Config {
    /// Set/replace the stored API key.
    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "owm", "owm-client")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_key() {
        let config = Config::default();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn set_api_key_stores_key() {
        let mut config = Config::default();
        config.set_api_key("KEY".to_string());
        assert_eq!(config.api_key.as_deref(), Some("KEY"));
    }

    #[test]
    fn toml_roundtrip() {
        let mut config = Config::default();
        config.set_api_key("KEY".to_string());

        let toml = toml::to_string_pretty(&config).expect("config serializes");
        let parsed: Config = toml::from_str(&toml).expect("config parses back");
        assert_eq!(parsed.api_key.as_deref(), Some("KEY"));
    }
}
