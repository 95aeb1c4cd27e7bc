//! Shared utilities for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use relic_core::repo::RELIC_DIR;

/// Find the repository root by walking up from cwd to find .relic/
pub fn find_repo_root() -> Result<PathBuf> {
    let mut current = std::env::current_dir().context("Failed to get current directory")?;

    loop {
        let relic_dir = current.join(RELIC_DIR);
        if relic_dir.is_dir() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => anyhow::bail!("Not a relic repository (no {} directory found)", RELIC_DIR),
        }
    }
}
