//! Local persistence for the workout log.
//!
//! The whole collection lives in one file under the storage root:
//!
//! ```text
//! <root>/workouts.json   # serialized array of workout records
//! ```
//!
//! Every save rewrites the full array; load reconstructs it, treating a
//! missing or malformed file as an empty collection.

use std::{fs, io, path::PathBuf};

use crate::model::Workout;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// File-based storage for the workout collection.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Creates a storage instance rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            path: root.join("workouts.json"),
        })
    }

    /// Returns the default storage root: `~/.waymark/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".waymark"))
    }

    /// Writes the entire collection, replacing whatever was saved before.
    pub fn save(&self, workouts: &[Workout]) -> Result<()> {
        let json = serde_json::to_string_pretty(workouts)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Reads the saved collection.
    ///
    /// A missing file yields an empty collection, and so does a malformed
    /// one: unreadable history never blocks a session.
    pub fn load(&self) -> Result<Vec<Workout>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&json).unwrap_or_default())
    }

    /// Removes the saved collection entirely. The only delete there is.
    pub fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
