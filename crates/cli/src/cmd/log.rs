//! Display the commit history

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use relic_core::{HistoryWalker, Repository};

pub fn run() -> Result<()> {
    // 1. Find repository root
    let repo_root = crate::util::find_repo_root().context("Failed to find repository")?;
    let repo = Repository::open(&repo_root)?;

    // 2. Walk the chain from the current head
    let walker = HistoryWalker::from_head(&repo)?;

    let mut any = false;
    for commit in walker {
        let commit = commit.context("Failed to read commit history")?;
        any = true;

        println!(
            "{} {} {}",
            commit.hash.short().yellow(),
            commit.timestamp.dimmed(),
            commit.message
        );
    }

    if !any {
        println!("{}", "No commits yet".dimmed());
    }

    Ok(())
}
