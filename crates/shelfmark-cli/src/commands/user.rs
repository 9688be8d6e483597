//! User commands
//!
//! Usage: shelfmark user <register|remove|list> ...

use clap::{Args, Subcommand};
use shelfmark_core::errors::CatalogError;
use std::path::Path;

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Register a new borrower
    Register { name: String, user_id: String },
    /// Remove a user (must hold no loans)
    Remove { user_id: String },
    /// List all users with their borrowed-book counts
    List {
        /// Emit JSON instead of text lines
        #[arg(long)]
        json: bool,
    },
}

/// Execute user command
pub fn execute(args: UserArgs, db_path: &Path) -> Result<(), CatalogError> {
    let mut store = super::open_store(db_path)?;

    match args.command {
        UserCommand::Register { name, user_id } => {
            if store.register_user(&name, &user_id)? {
                println!("User registered!");
            } else {
                println!("User already exists.");
            }
        }
        UserCommand::Remove { user_id } => {
            if store.remove_user(&user_id)? {
                println!("User removed!");
            } else {
                println!("Could not remove user.");
            }
        }
        UserCommand::List { json } => {
            let users = store.list_users()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&users)?);
            } else {
                for summary in users {
                    println!("{}", summary);
                }
            }
        }
    }

    Ok(())
}
