//! History walking, newest-first
//!
//! The walker resolves the head once at construction and follows parent
//! links from that fixed starting hash, so a concurrently advancing head
//! cannot tear the traversal. A missing parent object surfaces as
//! `BrokenChain`; reaching the root is the only way the walk ends cleanly.

use crate::commit::{read_commit, Commit};
use crate::error::{RepoError, Result};
use crate::hash::ObjectHash;
use crate::repo::Repository;

/// Lazy iterator over commits from head to root
pub struct HistoryWalker<'a> {
    repo: &'a Repository,
    next: Option<ObjectHash>,
    /// Hash of the commit that produced `next`, for error reporting
    came_from: Option<ObjectHash>,
}

impl<'a> HistoryWalker<'a> {
    /// Start a walk from the repository's current head
    pub fn from_head(repo: &'a Repository) -> Result<Self> {
        let head = repo.head()?;
        Ok(Self::from_hash(repo, head))
    }

    /// Start a walk from a fixed commit hash
    pub fn from_hash(repo: &'a Repository, start: Option<ObjectHash>) -> Self {
        Self {
            repo,
            next: start,
            came_from: None,
        }
    }
}

impl Iterator for HistoryWalker<'_> {
    type Item = Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        let hash = self.next.take()?;

        match read_commit(self.repo, &hash) {
            Ok(commit) => {
                self.came_from = Some(hash);
                self.next = commit.parent;
                Some(Ok(commit))
            }
            Err(RepoError::CommitNotFound(missing)) => {
                // Distinguish a bad starting hash from corruption mid-chain
                let err = match self.came_from {
                    Some(child) => RepoError::BrokenChain {
                        commit: child.to_hex(),
                        parent: missing,
                    },
                    None => RepoError::CommitNotFound(missing),
                };
                Some(Err(err))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::create_commit;

    #[test]
    fn test_walk_visits_all_commits_newest_first() -> Result<()> {
        let temp = tempfile::tempdir().unwrap();
        let repo = Repository::init(temp.path())?;

        let c1 = create_commit(&repo, "one")?;
        let c2 = create_commit(&repo, "two")?;
        let c3 = create_commit(&repo, "three")?;

        let walked: Vec<Commit> = HistoryWalker::from_head(&repo)?
            .collect::<Result<Vec<_>>>()?;

        let hashes: Vec<_> = walked.iter().map(|c| c.hash).collect();
        assert_eq!(hashes, vec![c3.hash, c2.hash, c1.hash]);
        assert!(walked.last().unwrap().parent.is_none());

        Ok(())
    }

    #[test]
    fn test_walk_empty_repository() -> Result<()> {
        let temp = tempfile::tempdir().unwrap();
        let repo = Repository::init(temp.path())?;

        assert_eq!(HistoryWalker::from_head(&repo)?.count(), 0);
        Ok(())
    }

    #[test]
    fn test_walk_is_restartable() -> Result<()> {
        let temp = tempfile::tempdir().unwrap();
        let repo = Repository::init(temp.path())?;

        create_commit(&repo, "one")?;
        create_commit(&repo, "two")?;

        assert_eq!(HistoryWalker::from_head(&repo)?.count(), 2);
        assert_eq!(HistoryWalker::from_head(&repo)?.count(), 2);

        Ok(())
    }

    #[test]
    fn test_missing_parent_surfaces_broken_chain() -> Result<()> {
        let temp = tempfile::tempdir().unwrap();
        let repo = Repository::init(temp.path())?;

        let c1 = create_commit(&repo, "one")?;
        let c2 = create_commit(&repo, "two")?;

        // Corrupt the chain by deleting the first commit's object
        std::fs::remove_file(temp.path().join(".relic/objects").join(c1.hash.to_hex()))?;

        let results: Vec<_> = HistoryWalker::from_head(&repo)?.collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap().hash, c2.hash);
        assert!(matches!(
            results[1].as_ref().unwrap_err(),
            RepoError::BrokenChain { .. }
        ));

        Ok(())
    }

    #[test]
    fn test_walk_from_unknown_start_is_commit_not_found() -> Result<()> {
        let temp = tempfile::tempdir().unwrap();
        let repo = Repository::init(temp.path())?;

        let fake = crate::hash::hash_bytes(b"nowhere");
        let mut walker = HistoryWalker::from_hash(&repo, Some(fake));

        let err = walker.next().unwrap().unwrap_err();
        assert!(matches!(err, RepoError::CommitNotFound(_)));

        Ok(())
    }
}
