//! Errors raised by the storage layer.

use catalog_common::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
