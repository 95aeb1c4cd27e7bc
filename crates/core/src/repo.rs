//! Repository context
//!
//! A `Repository` is constructed at command start, used for exactly one
//! operation, and discarded; there is no process-wide repository state.
//! All shared state lives on disk under `.relic/`:
//!
//! ```text
//! .relic/
//!   objects/<hash>   one file per content object or serialized commit
//!   HEAD             hex hash of the current head commit, empty if none
//!   index            JSON staging index, [] when clean
//!   lock             advisory lock for mutating operations
//!   tmp/             scratch space for atomic writes
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RepoError, Result};
use crate::hash::ObjectHash;
use crate::index::StagingIndex;
use crate::lock::RepoLock;
use crate::store::{atomic_write, ObjectStore};

/// Directory name of the repository metadata root
pub const RELIC_DIR: &str = ".relic";

/// Handle to an initialized repository
#[derive(Debug)]
pub struct Repository {
    root: PathBuf,
    relic_dir: PathBuf,
}

impl Repository {
    /// Initialize a new repository at the given root
    pub fn init(root: &Path) -> Result<Self> {
        let relic_dir = root.join(RELIC_DIR);

        if relic_dir.exists() {
            return Err(RepoError::AlreadyInitialized(root.to_path_buf()));
        }

        fs::create_dir(&relic_dir)?;
        fs::create_dir_all(relic_dir.join("objects"))?;
        fs::create_dir_all(relic_dir.join("tmp"))?;
        fs::write(relic_dir.join("HEAD"), "")?;
        fs::write(relic_dir.join("index"), "[]")?;

        tracing::debug!(root = %root.display(), "initialized repository");

        Ok(Self {
            root: root.to_path_buf(),
            relic_dir,
        })
    }

    /// Open an existing repository
    pub fn open(root: &Path) -> Result<Self> {
        let relic_dir = root.join(RELIC_DIR);

        if !relic_dir.is_dir() {
            return Err(RepoError::NotInitialized(root.to_path_buf()));
        }

        Ok(Self {
            root: root.to_path_buf(),
            relic_dir,
        })
    }

    /// The working-tree root this repository tracks
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `.relic` metadata directory
    pub fn relic_dir(&self) -> &Path {
        &self.relic_dir
    }

    /// The object store for this repository
    pub fn store(&self) -> ObjectStore {
        ObjectStore::new(self.relic_dir.join("objects"), self.relic_dir.join("tmp"))
    }

    /// The staging index for this repository
    pub fn index(&self) -> StagingIndex {
        StagingIndex::new(self.relic_dir.join("index"), self.relic_dir.join("tmp"))
    }

    /// Acquire the exclusive lock guarding mutating operations
    pub fn lock(&self) -> Result<RepoLock> {
        RepoLock::acquire(&self.relic_dir)
    }

    /// Read the head reference
    ///
    /// Returns `None` when no commit exists yet; a missing or empty HEAD
    /// file is not an error.
    pub fn head(&self) -> Result<Option<ObjectHash>> {
        let head_path = self.relic_dir.join("HEAD");
        if !head_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&head_path)?;
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        Ok(Some(ObjectHash::from_hex(trimmed)?))
    }

    /// Advance the head reference
    ///
    /// Callers must persist the commit object before calling this, so a
    /// crash can never leave HEAD pointing at a missing object.
    pub fn set_head(&self, hash: &ObjectHash) -> Result<()> {
        atomic_write(
            &self.relic_dir.join("tmp"),
            &self.relic_dir.join("HEAD"),
            hash.to_hex().as_bytes(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::hash_bytes;

    #[test]
    fn test_init_creates_layout() -> Result<()> {
        let temp = tempfile::tempdir().unwrap();
        let repo = Repository::init(temp.path())?;

        assert!(repo.relic_dir().join("objects").is_dir());
        assert!(repo.relic_dir().join("HEAD").is_file());
        assert!(repo.relic_dir().join("index").is_file());
        assert!(repo.relic_dir().join("tmp").is_dir());

        Ok(())
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = tempfile::tempdir().unwrap();
        Repository::init(temp.path()).unwrap();

        let err = Repository::init(temp.path()).unwrap_err();
        assert!(matches!(err, RepoError::AlreadyInitialized(_)));
    }

    #[test]
    fn test_open_uninitialized_fails() {
        let temp = tempfile::tempdir().unwrap();
        let err = Repository::open(temp.path()).unwrap_err();
        assert!(matches!(err, RepoError::NotInitialized(_)));
    }

    #[test]
    fn test_head_starts_empty() -> Result<()> {
        let temp = tempfile::tempdir().unwrap();
        let repo = Repository::init(temp.path())?;

        assert!(repo.head()?.is_none());
        Ok(())
    }

    #[test]
    fn test_set_head_then_read() -> Result<()> {
        let temp = tempfile::tempdir().unwrap();
        let repo = Repository::init(temp.path())?;

        let hash = hash_bytes(b"a commit");
        repo.set_head(&hash)?;

        assert_eq!(repo.head()?, Some(hash));
        Ok(())
    }

    #[test]
    fn test_index_empty_after_init() -> Result<()> {
        let temp = tempfile::tempdir().unwrap();
        let repo = Repository::init(temp.path())?;

        assert!(repo.index().load()?.is_empty());
        Ok(())
    }
}
