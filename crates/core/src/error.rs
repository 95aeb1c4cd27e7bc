//! Error types for repository operations
//!
//! Storage and parsing failures are never retried; each variant carries
//! enough context (operation, path, or hash) to diagnose from the message
//! alone.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for repository operations
#[derive(Debug, Error)]
pub enum RepoError {
    /// Repository metadata already exists at this root
    #[error("repository already initialized at {0}")]
    AlreadyInitialized(PathBuf),

    /// No repository metadata found at this root
    #[error("not a relic repository: {0}")]
    NotInitialized(PathBuf),

    /// A requested content hash has no stored object
    #[error("object not found: {0}")]
    ObjectNotFound(String),

    /// A requested commit is absent or its stored record is malformed
    #[error("commit not found: {0}")]
    CommitNotFound(String),

    /// A commit's parent hash cannot be resolved - history is corrupt
    #[error("broken chain: commit {commit} references missing parent {parent}")]
    BrokenChain { commit: String, parent: String },

    /// The path given to add() does not exist or is unreadable
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The staging index file exists but cannot be parsed
    #[error("corrupt staging index at {path}: {reason}")]
    CorruptIndex { path: PathBuf, reason: String },

    /// A hash argument is not valid hex of the right length
    #[error("invalid hash: {0}")]
    InvalidHash(String),

    /// Another mutating operation holds the repository lock
    #[error("repository is locked by another process ({0})")]
    LockHeld(PathBuf),

    /// I/O error (filesystem level)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RepoError {
    /// Check if this error indicates the resource doesn't exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RepoError::ObjectNotFound(_) | RepoError::CommitNotFound(_)
        )
    }
}

/// Result type alias used throughout relic-core
pub type Result<T> = std::result::Result<T, RepoError>;
