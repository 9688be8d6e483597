//! Shelfmark CLI
//!
//! Command-line interface for the catalog

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "shelfmark")]
#[command(about = "Shelfmark - library catalog manager", long_about = None)]
struct Cli {
    /// Path to the catalog database
    #[arg(long, global = true, default_value = ".shelfmark/catalog.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Book operations (add, remove, list, search)
    Book(commands::book::BookArgs),
    /// User operations (register, remove, list)
    User(commands::user::UserArgs),
    /// Loan operations (borrow, return, list)
    Loan(commands::loan::LoanArgs),
}

fn main() {
    shelfmark_core::logging::init(shelfmark_core::logging::Profile::Development);

    let cli = Cli::parse();
    let Cli { db, command } = cli;

    let result = match command {
        Commands::Book(args) => commands::book::execute(args, &db),
        Commands::User(args) => commands::user::execute(args, &db),
        Commands::Loan(args) => commands::loan::execute(args, &db),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
