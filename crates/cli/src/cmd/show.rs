//! Show a commit's files and their diff against the parent

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use relic_core::{
    commit::{read_commit, Commit},
    diff::{diff, DiffChunk, DiffKind},
    ObjectHash, Repository,
};

pub fn run(hash: &str) -> Result<()> {
    // 1. Find repository root
    let repo_root = crate::util::find_repo_root().context("Failed to find repository")?;
    let repo = Repository::open(&repo_root)?;

    // 2. Resolve the target commit
    let hash = ObjectHash::from_hex(hash).with_context(|| format!("Commit not found: {hash}"))?;
    let commit = read_commit(&repo, &hash)?;

    // 3. Resolve the parent once; every file diffs against the same parent
    let parent = match commit.parent {
        Some(parent_hash) => Some(
            read_commit(&repo, &parent_hash)
                .context("Failed to read parent commit")?,
        ),
        None => None,
    };

    println!("{} {}", "commit".bold(), commit.hash.to_hex().yellow());
    println!("Date:    {}", commit.timestamp);
    println!("Message: {}", commit.message);
    println!();

    if commit.files.is_empty() {
        println!("{}", "No files in this commit".dimmed());
        return Ok(());
    }

    // 4. Per file: full content, then the diff against the parent's version
    for entry in &commit.files {
        let bytes = repo
            .store()
            .get(&entry.hash)
            .with_context(|| format!("Failed to read content of {}", entry.path))?;
        let content = String::from_utf8_lossy(&bytes);

        println!("{} {}", "──".dimmed(), entry.path.bold());
        print!("{content}");
        if !content.ends_with('\n') && !content.is_empty() {
            println!();
        }
        println!();

        match &parent {
            None => println!("  {}", "First commit".cyan()),
            Some(parent) => match parent_content(&repo, parent, &entry.path)? {
                None => println!("  {}", "New file in this commit".green()),
                Some(old_content) => render_diff(&diff(&old_content, &content)),
            },
        }
        println!();
    }

    Ok(())
}

/// Look up this path's content in the parent commit, if it was present
fn parent_content(repo: &Repository, parent: &Commit, path: &str) -> Result<Option<String>> {
    let entry = match parent.files.iter().find(|e| e.path == path) {
        Some(entry) => entry,
        None => return Ok(None),
    };

    let bytes = repo
        .store()
        .get(&entry.hash)
        .with_context(|| format!("Failed to read parent content of {path}"))?;

    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

/// Render diff chunks line by line: `+` added, `-` removed, plain unchanged
fn render_diff(chunks: &[DiffChunk]) {
    for chunk in chunks {
        for line in chunk.text.split_inclusive('\n') {
            let line = line.strip_suffix('\n').unwrap_or(line);
            match chunk.kind {
                DiffKind::Added => println!("{}", format!("+ {line}").green()),
                DiffKind::Removed => println!("{}", format!("- {line}").red()),
                DiffKind::Unchanged => println!("  {line}"),
            }
        }
    }
}
