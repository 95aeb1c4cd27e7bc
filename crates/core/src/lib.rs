//! Relic Core - content-addressed storage and linear commit history
//!
//! This crate provides the engine behind the `relic` CLI:
//! - SHA-1 content hashing
//! - Append-only object store
//! - Staging index for the next commit's file set
//! - Commit chain with a single mutable head reference
//! - History walking and line-level diffing

pub mod commit;
pub mod diff;
pub mod error;
pub mod hash;
pub mod history;
pub mod index;
pub mod lock;
pub mod repo;
pub mod store;

// Re-export main types for convenience
pub use commit::Commit;
pub use diff::{diff, DiffChunk, DiffKind};
pub use error::{RepoError, Result};
pub use hash::{hash_bytes, ObjectHash};
pub use history::HistoryWalker;
pub use index::{StagingEntry, StagingIndex};
pub use lock::RepoLock;
pub use repo::Repository;
pub use store::ObjectStore;
