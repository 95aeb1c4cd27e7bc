//! Initialize a repository

use anyhow::Result;
use owo_colors::OwoColorize;
use relic_core::{RepoError, Repository};

pub fn run() -> Result<()> {
    let current_dir = std::env::current_dir()?;

    match Repository::init(&current_dir) {
        Ok(repo) => {
            println!(
                "{} Initialized empty relic repository in {}",
                "✓".green(),
                repo.relic_dir().display()
            );
            Ok(())
        }
        // Re-running init is a no-op, not a failure
        Err(RepoError::AlreadyInitialized(root)) => {
            println!(
                "{}",
                format!("Repository already initialized at {}", root.display()).dimmed()
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
