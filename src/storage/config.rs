//! Configuration handling
//!
//! Configuration is stored in `.pantry/config.toml`. All fields have
//! defaults, so a missing or partial file is fine.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Pantry configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Snapshot file name inside `.pantry/`
    pub snapshot_file: String,

    /// Render gradient colour swatches in text output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_file: "pantry.json".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Loads the configuration for a pantry root, falling back to defaults
    pub fn for_root(root: &Path) -> Result<Self> {
        let config_path = root.join(".pantry").join("config.toml");

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.snapshot_file, "pantry.json");
        assert!(config.color);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::for_root(dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_partial_config() {
        let config: Config = toml::from_str("color = false").unwrap();
        assert!(!config.color);
        assert_eq!(config.snapshot_file, "pantry.json");
    }

    #[test]
    fn loads_from_pantry_dir() {
        let dir = TempDir::new().unwrap();
        let pantry_dir = dir.path().join(".pantry");
        fs::create_dir_all(&pantry_dir).unwrap();
        fs::write(
            pantry_dir.join("config.toml"),
            "snapshot_file = \"state.json\"\ncolor = false\n",
        )
        .unwrap();

        let config = Config::for_root(dir.path()).unwrap();
        assert_eq!(config.snapshot_file, "state.json");
        assert!(!config.color);
    }

    #[test]
    fn invalid_config_fails() {
        let dir = TempDir::new().unwrap();
        let pantry_dir = dir.path().join(".pantry");
        fs::create_dir_all(&pantry_dir).unwrap();
        fs::write(pantry_dir.join("config.toml"), "color = \"maybe\"").unwrap();

        assert!(Config::for_root(dir.path()).is_err());
    }
}
