//! Relic CLI - minimal local version control

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod util;

/// Relic - content-addressed snapshots with a linear history
#[derive(Parser)]
#[command(name = "relic")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a repository in the current directory
    Init,
    /// Hash a file's content and stage it for the next commit
    Add {
        /// Path of the file to stage
        file: String,
    },
    /// Create a commit from the staged files
    Commit {
        /// Commit message
        message: String,
    },
    /// Show the commit history, newest first
    Log,
    /// Show a commit's files and their diff against the parent
    Show {
        /// Commit hash
        hash: String,
    },
    /// List the staged files
    Status,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => cmd::init::run(),
        Commands::Add { file } => cmd::add::run(&file),
        Commands::Commit { message } => cmd::commit::run(&message),
        Commands::Log => cmd::log::run(),
        Commands::Show { hash } => cmd::show::run(&hash),
        Commands::Status => cmd::status::run(),
    }
}
