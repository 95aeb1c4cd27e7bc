//! Stage a file for the next commit

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use relic_core::{RepoError, Repository};

pub fn run(file: &str) -> Result<()> {
    // 1. Find repository root
    let repo_root = crate::util::find_repo_root().context("Failed to find repository")?;
    let repo = Repository::open(&repo_root)?;

    // 2. Exclusive lock: add mutates the staging index
    let _lock = repo.lock()?;

    // 3. Read the file's content
    let content = std::fs::read(file).map_err(|source| RepoError::FileRead {
        path: file.into(),
        source,
    })?;

    // 4. Store the content and record the staging entry
    let hash = repo.store().put(&content)?;
    repo.index().stage(file, hash)?;

    println!("{} {}", hash.to_hex().yellow(), file);
    println!("{} Staged {}", "✓".green(), file);

    Ok(())
}
