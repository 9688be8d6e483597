//! Book commands
//!
//! Usage: shelfmark book <add|remove|list|search> ...

use clap::{Args, Subcommand};
use shelfmark_core::errors::CatalogError;
use std::path::Path;

#[derive(Debug, Args)]
pub struct BookArgs {
    #[command(subcommand)]
    pub command: BookCommand,
}

#[derive(Debug, Subcommand)]
pub enum BookCommand {
    /// Add a book to the catalog
    Add {
        title: String,
        author: String,
        isbn: String,
    },
    /// Remove a book (must not be borrowed)
    Remove { isbn: String },
    /// List books in the catalog
    List {
        /// Only show books that are not borrowed
        #[arg(long)]
        available: bool,

        /// Emit JSON instead of text lines
        #[arg(long)]
        json: bool,
    },
    /// Search by title, author, or ISBN
    Search {
        query: String,

        /// Emit JSON instead of text lines
        #[arg(long)]
        json: bool,
    },
}

/// Execute book command
pub fn execute(args: BookArgs, db_path: &Path) -> Result<(), CatalogError> {
    let store = super::open_store(db_path)?;

    match args.command {
        BookCommand::Add {
            title,
            author,
            isbn,
        } => {
            if store.add_book(&title, &author, &isbn)? {
                println!("Book added!");
            } else {
                println!("Book already exists.");
            }
        }
        BookCommand::Remove { isbn } => {
            if store.remove_book(&isbn)? {
                println!("Book removed!");
            } else {
                println!("Could not remove book.");
            }
        }
        BookCommand::List { available, json } => {
            let books = store.list_books(available)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&books)?);
            } else {
                for book in books {
                    println!("{}", book);
                }
            }
        }
        BookCommand::Search { query, json } => {
            let matches = store.search_book(&query)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else if matches.is_empty() {
                println!("No matches found.");
            } else {
                for book in matches {
                    println!("{}", book);
                }
            }
        }
    }

    Ok(())
}
