//! Snapshot storage.
//!
//! One JSON blob at a fixed path under the user config directory, read
//! once at startup and rewritten in full on every edit. Writes are atomic
//! (temp file + rename). No failure here is fatal: an unreadable file
//! falls back to the default snapshot, and the first failed write flips
//! the store into in-memory-only mode for the rest of the session.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::snapshot::Snapshot;

/// File name of the stored blob ("the fixed key").
const SNAPSHOT_FILE: &str = "session.json";

/// Durable store for the session snapshot.
#[derive(Debug)]
pub struct SnapshotStore {
    path: Option<PathBuf>,
    /// Set after a write failure; suppresses further disk access.
    degraded: bool,
}

impl SnapshotStore {
    /// Store at the platform config location.
    ///
    /// When no config directory exists on this platform the store starts
    /// in memory-only mode.
    pub fn at_default_location() -> Self {
        match Self::default_path() {
            Ok(path) => Self::at_path(path),
            Err(err) => {
                tracing::warn!("snapshot storage unavailable: {err}");
                Self::in_memory()
            }
        }
    }

    /// Store backed by a specific file.
    pub fn at_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            degraded: false,
        }
    }

    /// Store that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            degraded: false,
        }
    }

    /// The default snapshot path.
    pub fn default_path() -> Result<PathBuf> {
        directories::ProjectDirs::from("com", "TypegenStudio", "Typegen Studio")
            .map(|dirs| dirs.config_dir().join(SNAPSHOT_FILE))
            .ok_or(StoreError::NoConfigDir)
    }

    /// Load the stored snapshot, falling back to the default when the
    /// file is absent or unreadable.
    pub fn load(&self) -> Snapshot {
        let Some(path) = &self.path else {
            return Snapshot::default();
        };
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
                tracing::warn!("stored snapshot is unreadable, using defaults: {err}");
                Snapshot::default()
            }),
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("failed to read stored snapshot, using defaults: {err}");
                }
                Snapshot::default()
            }
        }
    }

    /// Persist the snapshot.
    ///
    /// A failure is logged and degrades the store to in-memory-only; the
    /// caller is never bothered with it.
    pub fn save(&mut self, snapshot: &Snapshot) {
        if self.degraded {
            return;
        }
        let Some(path) = self.path.clone() else {
            return;
        };
        if let Err(err) = write_snapshot(&path, snapshot) {
            tracing::warn!(
                "failed to persist snapshot, continuing in memory only: {err}"
            );
            self.degraded = true;
        }
    }

    /// Whether a write failure has put the store in memory-only mode.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

/// Atomic write: serialize, write a temp file next to the target, rename.
fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let content = serde_json::to_string_pretty(snapshot).map_err(StoreError::Serialize)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StoreError::Io {
            operation: "create directory for",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;
    file.write_all(content.as_bytes()).map_err(|e| StoreError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;
    file.sync_all().map_err(|e| StoreError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;
    drop(file);

    fs::rename(&temp_path, path).map_err(|e| StoreError::Io {
        operation: "replace",
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("snapshot saved to {}", path.display());
    Ok(())
}
