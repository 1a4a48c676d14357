//! Pantry directory management
//!
//! Handles `.pantry/` initialization and lookup by walking up from the
//! current directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::{Config, SnapshotStore};

#[derive(Debug, Error)]
pub enum PantryDirError {
    #[error("Not in a pantry. Run 'pantry init' first.")]
    NotInPantry,
}

/// An opened pantry: a root directory containing `.pantry/`
pub struct PantryDir {
    root: PathBuf,
    config: Config,
}

impl PantryDir {
    /// Opens an existing pantry at the given root
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let pantry_dir = root.join(".pantry");

        if !pantry_dir.is_dir() {
            return Err(PantryDirError::NotInPantry.into());
        }

        let config = Config::for_root(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the pantry at the current directory or a parent
    pub fn open_current() -> Result<Self> {
        let root = Self::find_root().ok_or(PantryDirError::NotInPantry)?;

        Self::open(root)
    }

    /// Initializes a pantry at the given root
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let pantry_dir = root.join(".pantry");

        fs::create_dir_all(&pantry_dir).with_context(|| {
            format!(
                "Failed to create .pantry directory: {}",
                pantry_dir.display()
            )
        })?;

        let config_path = pantry_dir.join("config.toml");
        if !config_path.exists() {
            let default_config = r#"# Pantry configuration

# Snapshot file name inside .pantry/
snapshot_file = "pantry.json"

# Render gradient colour swatches in text output
color = true
"#;
            fs::write(&config_path, default_config)
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        }

        let opened = Self::open(root)?;

        // Seed an empty snapshot so the pantry is usable right away
        let store = opened.store();
        if !store.path().exists() {
            store.save(&crate::domain::Pantry::new())?;
        }

        Ok(opened)
    }

    /// Returns the pantry root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the `.pantry` directory path
    pub fn dir(&self) -> PathBuf {
        self.root.join(".pantry")
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the snapshot store
    pub fn store(&self) -> SnapshotStore {
        SnapshotStore::new(self.dir().join(&self.config.snapshot_file))
    }

    /// Finds the pantry root by looking for a `.pantry/` directory upwards
    pub fn find_root() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            if current.join(".pantry").is_dir() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }
}
