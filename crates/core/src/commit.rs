//! Commit records and chain management
//!
//! A commit is an immutable snapshot of the staging index plus a parent
//! link, stored in the object store under the hash of its own serialized
//! form. Field order in the serialized record is fixed by struct
//! declaration, so the hash is deterministic and any mutation of a stored
//! record changes its identity.

use serde::{Deserialize, Serialize};

use crate::error::{RepoError, Result};
use crate::hash::{hash_bytes, ObjectHash};
use crate::index::StagingEntry;
use crate::repo::Repository;

/// The serialized commit shape; the hash field is derived, never stored
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CommitRecord {
    timestamp: String,
    message: String,
    files: Vec<StagingEntry>,
    parent: Option<ObjectHash>,
}

/// An immutable commit in the chain
#[derive(Debug, Clone)]
pub struct Commit {
    /// Content hash of the serialized record; self-identifying
    pub hash: ObjectHash,
    /// Creation time, RFC 3339
    pub timestamp: String,
    /// Commit message
    pub message: String,
    /// Snapshot of the staging index at commit time
    pub files: Vec<StagingEntry>,
    /// Previous head, or `None` for the root commit
    pub parent: Option<ObjectHash>,
}

impl Commit {
    fn from_record(hash: ObjectHash, record: CommitRecord) -> Self {
        Self {
            hash,
            timestamp: record.timestamp,
            message: record.message,
            files: record.files,
            parent: record.parent,
        }
    }
}

/// Create a new commit from the currently staged files and advance the head
///
/// Ordering is load-bearing: the commit object is persisted first, HEAD is
/// advanced second, the index is cleared last. A crash between any two steps
/// leaves the head pointing at a fully persisted object.
pub fn create_commit(repo: &Repository, message: &str) -> Result<Commit> {
    let parent = repo.head()?;
    let files = repo.index().load()?;

    let record = CommitRecord {
        timestamp: chrono::Utc::now().to_rfc3339(),
        message: message.to_string(),
        files,
        parent,
    };

    let serialized = serde_json::to_vec(&record)?;
    let hash = repo.store().put(&serialized)?;

    repo.set_head(&hash)?;
    repo.index().clear()?;

    tracing::debug!(hash = %hash, files = record.files.len(), "created commit");

    Ok(Commit::from_record(hash, record))
}

/// Read a commit back from the object store
///
/// Absent and malformed records are both reported as `CommitNotFound`; a
/// stored object that does not parse as a commit record is not a commit.
pub fn read_commit(repo: &Repository, hash: &ObjectHash) -> Result<Commit> {
    let bytes = match repo.store().get(hash) {
        Ok(bytes) => bytes,
        Err(RepoError::ObjectNotFound(_)) => {
            return Err(RepoError::CommitNotFound(hash.to_hex()))
        }
        Err(e) => return Err(e),
    };

    let record: CommitRecord = serde_json::from_slice(&bytes)
        .map_err(|_| RepoError::CommitNotFound(hash.to_hex()))?;

    Ok(Commit::from_record(*hash, record))
}

/// Recompute a commit's hash from its fields
///
/// Useful for integrity checks: a stored record whose bytes were tampered
/// with no longer hashes to its storage key.
pub fn commit_hash(commit: &Commit) -> Result<ObjectHash> {
    let record = CommitRecord {
        timestamp: commit.timestamp.clone(),
        message: commit.message.clone(),
        files: commit.files.clone(),
        parent: commit.parent,
    };
    let serialized = serde_json::to_vec(&record)?;
    Ok(hash_bytes(&serialized))
}
