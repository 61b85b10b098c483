//! Durable profile storage
//!
//! The store talks to storage through [`ProfileStorage`], a single-blob
//! key-value contract: load the whole serialized aggregate or nothing,
//! save it whole, clear it on reset. Failures are surfaced as errors and
//! the caller decides how gracefully to degrade.

use crate::core::error::{CodequestError, Result};
use std::fs;
use std::path::PathBuf;

/// Durable storage for one serialized profile blob
pub trait ProfileStorage {
    /// Load the raw blob, `None` when no profile has been saved yet
    fn load(&self) -> Result<Option<String>>;

    /// Persist the raw blob, replacing any previous one
    fn save(&mut self, blob: &str) -> Result<()>;

    /// Remove the persisted blob
    fn clear(&mut self) -> Result<()>;
}

/// Profile stored as a single JSON file on disk
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProfileStorage for FileStorage {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let blob = fs::read_to_string(&self.path)?;
        Ok(Some(blob))
    }

    fn save(&mut self, blob: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write-then-rename so a crash mid-save cannot truncate the profile
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStorage {
    blob: Option<String>,
    /// When set, every operation fails (for failure-path tests)
    pub fail: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>> {
        if self.fail {
            return Err(CodequestError::StorageError("memory storage failing".into()));
        }
        Ok(self.blob.clone())
    }

    fn save(&mut self, blob: &str) -> Result<()> {
        if self.fail {
            return Err(CodequestError::StorageError("memory storage failing".into()));
        }
        self.blob = Some(blob.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.fail {
            return Err(CodequestError::StorageError("memory storage failing".into()));
        }
        self.blob = None;
        Ok(())
    }
}
