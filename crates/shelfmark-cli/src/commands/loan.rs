//! Loan commands
//!
//! Usage: shelfmark loan <borrow|return|list> ...

use clap::{Args, Subcommand};
use shelfmark_core::errors::CatalogError;
use std::path::Path;

#[derive(Debug, Args)]
pub struct LoanArgs {
    #[command(subcommand)]
    pub command: LoanCommand,
}

#[derive(Debug, Subcommand)]
pub enum LoanCommand {
    /// Borrow a book for a user
    Borrow { isbn: String, user_id: String },
    /// Return a borrowed book
    Return { isbn: String, user_id: String },
    /// List the books a user currently has out
    List {
        user_id: String,

        /// Emit JSON instead of text lines
        #[arg(long)]
        json: bool,
    },
}

/// Execute loan command
pub fn execute(args: LoanArgs, db_path: &Path) -> Result<(), CatalogError> {
    let mut store = super::open_store(db_path)?;

    match args.command {
        LoanCommand::Borrow { isbn, user_id } => {
            if store.borrow_book(&isbn, &user_id)? {
                println!("Book borrowed!");
            } else {
                println!("Borrow failed.");
            }
        }
        LoanCommand::Return { isbn, user_id } => {
            if store.return_book(&isbn, &user_id)? {
                println!("Book returned!");
            } else {
                println!("Return failed.");
            }
        }
        LoanCommand::List { user_id, json } => match store.list_user_loans(&user_id)? {
            None => println!("User not found."),
            Some(books) if json => {
                println!("{}", serde_json::to_string_pretty(&books)?);
            }
            Some(books) => {
                if books.is_empty() {
                    println!("No borrowed books.");
                } else {
                    for book in books {
                        println!("{}", book);
                    }
                }
            }
        },
    }

    Ok(())
}
