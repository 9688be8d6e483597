//! CLI command modules, one per entity

pub mod book;
pub mod loan;
pub mod user;

use shelfmark_core::errors::CatalogError;
use shelfmark_store::errors::io_error;
use shelfmark_store::CatalogStore;
use std::path::Path;

/// Open the catalog database, creating its directory on demand
pub fn open_store(db_path: &Path) -> Result<CatalogStore, CatalogError> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
        }
    }
    CatalogStore::open(db_path)
}
