use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Remove the last page from a comic archive, writing the result as a new .cbz file.
    #[command(alias = "r")]
    Remove {
        /// The .cbz or .cbr archive to trim. The source file is never modified.
        #[arg(required = true)]
        archive: PathBuf,
    },

    /// List the pages of a comic archive in page order without modifying it.
    #[command(alias = "l")]
    List {
        /// The .cbz or .cbr archive to list.
        #[arg(required = true)]
        archive: PathBuf,
    },
}

/// Parses command-line arguments using `clap` and returns the command to execute.
///
/// This is the main entry point for the CLI logic.
/// It handles parsing and returns a `Commands` enum variant, or an error if parsing fails.
pub fn run() -> Result<Commands, Box<dyn std::error::Error>> {
    let args = Args::parse();
    Ok(args.command)
}
