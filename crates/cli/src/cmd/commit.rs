//! Create a commit from the staged files

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use relic_core::{commit::create_commit, Repository};

pub fn run(message: &str) -> Result<()> {
    // 1. Find repository root
    let repo_root = crate::util::find_repo_root().context("Failed to find repository")?;
    let repo = Repository::open(&repo_root)?;

    // 2. Exclusive lock: commit rewrites HEAD and the staging index
    let _lock = repo.lock()?;

    let staged = repo.index().load()?;
    if staged.is_empty() {
        println!("{}", "Nothing staged; recording an empty commit".dimmed());
    }

    // 3. Create the commit and advance head
    let commit = create_commit(&repo, message)?;

    println!(
        "{} {} {}",
        "✓".green(),
        commit.hash.to_hex().yellow(),
        message
    );

    Ok(())
}
