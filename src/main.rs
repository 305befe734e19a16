//! Main entry point for the cbtrim CLI app

use cbtrim::cli::{self, Commands};
use cbtrim::{archive, trim};

fn main() -> std::process::ExitCode {
    env_logger::init();
    if let Err(e) = run_app() {
        if e.downcast_ref::<clap::Error>().is_none() {
            eprintln!("Error: {}", e);
        }
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    let command = cli::run()?;

    match &command {
        Commands::Remove { archive } => {
            let output = trim::remove_last_page(archive)?;
            println!("{}", output.display());
        }
        Commands::List { archive } => {
            let pages = archive::list_pages(archive)?;
            println!("Pages ({}):", pages.len());
            for page in pages {
                println!("- {}", page);
            }
        }
    }

    Ok(())
}
