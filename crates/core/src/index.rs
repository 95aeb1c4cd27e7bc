//! Staging index for the next commit's file set
//!
//! The index is an ordered JSON list of (path, hash) pairs, persisted after
//! every mutation since the CLI runs one command per process.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{RepoError, Result};
use crate::hash::ObjectHash;
use crate::store::atomic_write;

/// A single staged file: its path and the hash of its stored content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingEntry {
    pub path: String,
    pub hash: ObjectHash,
}

/// The on-disk staging index
pub struct StagingIndex {
    path: PathBuf,
    tmp_dir: PathBuf,
}

impl StagingIndex {
    /// Open the index backed by the given file
    pub fn new(path: PathBuf, tmp_dir: PathBuf) -> Self {
        Self { path, tmp_dir }
    }

    /// Read the current staging state
    ///
    /// A missing index file means nothing is staged.
    pub fn load(&self) -> Result<Vec<StagingEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.path)?;
        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|e| RepoError::CorruptIndex {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Append a new entry for this path
    ///
    /// Entries are never deduplicated or replaced: staging the same path
    /// twice records two entries, matching the engine's observed behavior.
    pub fn stage(&self, path: &str, hash: ObjectHash) -> Result<()> {
        let mut entries = self.load()?;
        entries.push(StagingEntry {
            path: path.to_string(),
            hash,
        });
        self.persist(&entries)?;
        tracing::debug!(path, hash = %hash, staged = entries.len(), "staged file");
        Ok(())
    }

    /// Reset the index to an empty sequence
    pub fn clear(&self) -> Result<()> {
        self.persist(&[])
    }

    fn persist(&self, entries: &[StagingEntry]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(&entries)?;
        atomic_write(&self.tmp_dir, &self.path, &bytes)
    }
}
