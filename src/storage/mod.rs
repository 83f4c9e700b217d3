use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::domain::Question;

/// Handle on the snapshot file that holds the entire question collection.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.questions_path(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the storage directory if absent.
    pub fn ensure_dir(&self) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|err| AppError::StorageUnavailable(err.to_string()))?;
        }
        Ok(())
    }

    /// Reads the whole collection. A missing file is an empty bank, not an
    /// error; an unreadable or garbled file maps to `StorageUnavailable`.
    pub fn load(&self) -> AppResult<Vec<Question>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)
            .map_err(|err| AppError::StorageUnavailable(err.to_string()))?;
        serde_json::from_str(&raw).map_err(|err| AppError::StorageUnavailable(err.to_string()))
    }

    /// Rewrites the snapshot in full: the document is written to a temp file
    /// in the target directory and renamed over the snapshot, so a failure
    /// mid-write never leaves a truncated file behind.
    pub fn persist(&self, questions: &[Question]) -> AppResult<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(|err| AppError::StorageWriteFailure(err.to_string()))?;

        let document = serde_json::to_string_pretty(questions)
            .map_err(|err| AppError::StorageWriteFailure(err.to_string()))?;

        let mut tmp = NamedTempFile::new_in(dir)
            .map_err(|err| AppError::StorageWriteFailure(err.to_string()))?;
        tmp.write_all(document.as_bytes())
            .map_err(|err| AppError::StorageWriteFailure(err.to_string()))?;
        tmp.persist(&self.path)
            .map_err(|err| AppError::StorageWriteFailure(err.to_string()))?;

        Ok(())
    }
}
