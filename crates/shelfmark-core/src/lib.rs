//! Shelfmark Core - domain model for the catalog
//!
//! This crate provides the foundational types for Shelfmark:
//! - Book, User, and Loan value types
//! - The canonical error taxonomy for storage faults
//! - The logging facility
//!
//! Value objects here are transient: they are constructed per call from
//! rows in the store and carry no reference back to storage.

pub mod errors;
pub mod logging;
pub mod model;

// Re-export commonly used types
pub use errors::{CatalogError, Result};
pub use model::{Book, BookStatus, Loan, User, UserSummary};
