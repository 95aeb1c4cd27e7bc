//! List the staged files

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use relic_core::Repository;

pub fn run() -> Result<()> {
    // 1. Find repository root
    let repo_root = crate::util::find_repo_root().context("Failed to find repository")?;
    let repo = Repository::open(&repo_root)?;

    // 2. Read the staging index
    let entries = repo.index().load()?;

    if entries.is_empty() {
        println!("{}", "Nothing staged".dimmed());
        return Ok(());
    }

    println!("{}", "Staged files".bold());
    for entry in &entries {
        println!("  {} {}", entry.hash.short().yellow(), entry.path);
    }

    Ok(())
}
