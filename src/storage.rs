use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Task;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read task file: {0}")]
    ReadError(String),
    #[error("Failed to parse task file: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Failed to write task file: {0}")]
    WriteError(String),
}

/// File-backed storage for the task collection.
///
/// The backing file holds the whole collection as one JSON array; every
/// save replaces the file with a fresh snapshot. A missing file is the
/// bootstrap case and loads as an empty collection.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task collection from the backing file.
    ///
    /// Returns an empty collection when the file does not exist yet.
    /// A file that exists but does not parse is an error, not an empty
    /// collection.
    pub fn load(&self) -> Result<Vec<Task>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| StorageError::ReadError(e.to_string()))?;
        let tasks = serde_json::from_str(&contents)?;
        Ok(tasks)
    }

    /// Overwrite the backing file with the full collection.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| StorageError::WriteError(e.to_string()))?;
            }
        }

        let json = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, json).map_err(|e| StorageError::WriteError(e.to_string()))?;

        Ok(())
    }
}
