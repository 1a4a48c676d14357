//! JSON snapshot storage for the pantry model
//!
//! The whole model is stored as one JSON document. Writes go through a temp
//! file with an exclusive lock and finish with an atomic rename, so a failed
//! write never corrupts the existing snapshot. Reads take a shared lock.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::domain::Pantry;

/// Store for the pantry snapshot
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Creates a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the pantry from the snapshot, or an empty pantry if absent
    pub fn load(&self) -> Result<Pantry> {
        if !self.path.exists() {
            return Ok(Pantry::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open snapshot: {}", self.path.display()))?;

        file.lock_shared()
            .context("Failed to acquire read lock on snapshot")?;

        let reader = BufReader::new(&file);
        let pantry = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse snapshot: {}", self.path.display()))?;

        // Lock is released when file is dropped
        Ok(pantry)
    }

    /// Writes the pantry to the snapshot (full rewrite)
    pub fn save(&self, pantry: &Pantry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let temp_path = self.path.with_extension("json.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on snapshot")?;

            let mut writer = BufWriter::new(&file);
            serde_json::to_writer(&mut writer, pantry).context("Failed to serialize snapshot")?;
            writeln!(writer).context("Failed to write snapshot")?;
            writer.flush().context("Failed to flush snapshot")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

/// Writes a pretty-printed snapshot of the pantry to an arbitrary path
///
/// Used by `pantry export`. A failure here leaves the pantry's own snapshot
/// untouched.
pub fn export_snapshot(pantry: &Pantry, dest: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(pantry).context("Failed to serialize pantry for export")?;

    fs::write(dest, json + "\n")
        .with_context(|| format!("Failed to write export: {}", dest.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_pantry() -> Pantry {
        let mut pantry = Pantry::new();
        pantry.add_ingredient("egg").unwrap();
        pantry.set_available("egg", true).unwrap();
        pantry.add_recipe("Pancakes", "egg, flour").unwrap();
        pantry
    }

    #[test]
    fn load_missing_snapshot_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("pantry.json"));

        let pantry = store.load().unwrap();
        assert_eq!(pantry.recipe_count(), 0);
        assert_eq!(pantry.ingredient_count(), 0);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("pantry.json"));

        let pantry = sample_pantry();
        store.save(&pantry).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, pantry);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("nested").join("dir").join("pantry.json"));

        store.save(&sample_pantry()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn atomic_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("pantry.json"));

        store.save(&sample_pantry()).unwrap();

        let temp_path = store.path().with_extension("json.tmp");
        assert!(!temp_path.exists());
    }

    #[test]
    fn corrupt_snapshot_reports_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pantry.json");
        fs::write(&path, "not json").unwrap();

        let store = SnapshotStore::new(path);
        assert!(store.load().is_err());
    }

    #[test]
    fn export_writes_both_sections() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("export.json");

        export_snapshot(&sample_pantry(), &dest).unwrap();

        let content = fs::read_to_string(&dest).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["ingredients"]["egg"], serde_json::json!(true));
        assert_eq!(
            value["recipes"]["Pancakes"],
            serde_json::json!(["egg", "flour"])
        );
    }

    #[test]
    fn export_to_bad_path_fails_without_touching_store() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("pantry.json"));
        let pantry = sample_pantry();
        store.save(&pantry).unwrap();

        let bad_dest = dir.path().join("missing").join("export.json");
        assert!(export_snapshot(&pantry, &bad_dest).is_err());

        assert_eq!(store.load().unwrap(), pantry);
    }
}
