//! Inventory snapshot persistence.
//!
//! The whole collection lives in a single JSON file: a flat array of items,
//! overwritten in full after every mutation. There is no versioning or
//! migration; anything unreadable is treated as an empty collection.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{Inventory, Item};
use crate::infrastructure::config::AppConfig;

/// Snapshot persistence errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON encoding failed.
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads and writes the inventory snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: Option<PathBuf>,
}

impl SnapshotStore {
    /// Creates a store writing to the default platform data directory.
    ///
    /// If project directories cannot be determined, persistence is disabled
    /// and a warning is logged; the session still runs in memory.
    #[must_use]
    pub fn new() -> Self {
        match AppConfig::default_data_path() {
            Some(path) => Self { path: Some(path) },
            None => {
                warn!("Failed to determine project directories. Inventory persistence disabled.");
                Self { path: None }
            }
        }
    }

    /// Creates a store writing to a specific file (config override, tests).
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Returns the snapshot file path, if persistence is enabled.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads the persisted inventory.
    ///
    /// An absent, unreadable, or malformed snapshot yields an empty
    /// inventory; startup never fails on stored data.
    #[must_use]
    pub fn load(&self) -> Inventory {
        let Some(path) = &self.path else {
            return Inventory::new();
        };

        if !path.exists() {
            return Inventory::new();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read snapshot, starting empty");
                return Inventory::new();
            }
        };

        match serde_json::from_str::<Vec<Item>>(&content) {
            Ok(items) => {
                info!(count = items.len(), "Loaded inventory snapshot");
                Inventory::from_items(items)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Malformed snapshot, starting empty");
                Inventory::new()
            }
        }
    }

    /// Writes the full collection, replacing the prior snapshot.
    ///
    /// The write is atomic (temp file then rename) so a failure mid-write
    /// never corrupts the previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the directory cannot be created or the
    /// file cannot be written. Callers treat this as best effort.
    pub fn save(&self, inventory: &Inventory) -> Result<(), StorageError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string(inventory.items())?;

        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}
