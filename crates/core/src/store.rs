//! Append-only content-addressed object store
//!
//! Every stored object - raw file content or a serialized commit record -
//! lives at `objects/<hex hash>`. Writes are idempotent and atomic; nothing
//! ever mutates or removes a stored object.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{RepoError, Result};
use crate::hash::{hash_bytes, ObjectHash};

/// Object storage rooted at a repository's `objects/` directory
pub struct ObjectStore {
    objects_dir: PathBuf,
    tmp_dir: PathBuf,
}

impl ObjectStore {
    /// Create a store over the given objects and scratch directories
    pub fn new(objects_dir: PathBuf, tmp_dir: PathBuf) -> Self {
        Self {
            objects_dir,
            tmp_dir,
        }
    }

    /// Hash content and persist it under that hash
    ///
    /// Idempotent: if an object with this hash already exists the write is
    /// skipped and the same hash is returned.
    pub fn put(&self, content: &[u8]) -> Result<ObjectHash> {
        let hash = hash_bytes(content);
        let path = self.object_path(&hash);

        if path.exists() {
            return Ok(hash);
        }

        atomic_write(&self.tmp_dir, &path, content)?;
        tracing::debug!(hash = %hash, bytes = content.len(), "stored object");

        Ok(hash)
    }

    /// Read an object's content back by hash
    pub fn get(&self, hash: &ObjectHash) -> Result<Vec<u8>> {
        let path = self.object_path(hash);
        if !path.exists() {
            return Err(RepoError::ObjectNotFound(hash.to_hex()));
        }
        Ok(fs::read(&path)?)
    }

    /// Check whether an object with this hash has been persisted
    pub fn contains(&self, hash: &ObjectHash) -> bool {
        self.object_path(hash).exists()
    }

    fn object_path(&self, hash: &ObjectHash) -> PathBuf {
        self.objects_dir.join(hash.to_hex())
    }
}

/// Atomic write helper
///
/// Writes data to a temporary file, fsyncs it, then renames it to the target
/// path. A crash mid-write leaves at worst a stray temp file, never a
/// half-written object.
pub fn atomic_write(tmp_dir: &Path, target: &Path, data: &[u8]) -> Result<()> {
    fs::create_dir_all(tmp_dir)?;

    let temp_path = tmp_dir.join(uuid::Uuid::new_v4().to_string());

    let mut temp_file = fs::File::create(&temp_path)?;
    temp_file.write_all(data)?;
    temp_file.sync_all()?;
    drop(temp_file);

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::rename(&temp_path, target)?;

    // Fsync parent directory for durability; best effort, may fail on some
    // filesystems.
    if let Some(parent) = target.parent() {
        if let Ok(dir) = fs::File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}
