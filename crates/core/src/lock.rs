//! Advisory lock for mutating operations
//!
//! `add` and `commit` read and rewrite the staging index and head reference;
//! two concurrent mutators could interleave those reads and writes. Every
//! mutating operation therefore holds an exclusive flock on `.relic/lock`
//! for its duration. Read-only operations (log, show, status) skip the lock
//! and instead walk from a head hash resolved once.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::{RepoError, Result};

/// Exclusive repository lock, released on drop
#[derive(Debug)]
pub struct RepoLock {
    path: PathBuf,
    #[allow(dead_code)]
    file: File,
}

impl RepoLock {
    /// Acquire the lock (non-blocking, fails if another process holds it)
    pub fn acquire(relic_dir: &Path) -> Result<Self> {
        let lock_path = relic_dir.join("lock");

        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .open(&lock_path)?;

        if !try_flock_exclusive(&file)? {
            return Err(RepoError::LockHeld(lock_path));
        }

        Ok(Self {
            path: lock_path,
            file,
        })
    }
}

impl Drop for RepoLock {
    fn drop(&mut self) {
        // The flock itself is released when the file handle closes
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Try to acquire an exclusive file lock (non-blocking)
#[cfg(unix)]
fn try_flock_exclusive(file: &File) -> Result<bool> {
    use nix::fcntl::{flock, FlockArg};
    use std::os::unix::io::AsRawFd;

    match flock(file.as_raw_fd(), FlockArg::LockExclusiveNonblock) {
        Ok(_) => Ok(true),
        Err(nix::errno::Errno::EWOULDBLOCK) => Ok(false),
        Err(e) => Err(std::io::Error::from_raw_os_error(e as i32).into()),
    }
}

#[cfg(not(unix))]
fn try_flock_exclusive(_file: &File) -> Result<bool> {
    // No advisory locking on this platform; single mutator is assumed
    Ok(true)
}
