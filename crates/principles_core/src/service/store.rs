//! Scoped store acquisition.
//!
//! # Invariants
//! - The connection opened for a unit of work is dropped before the result is
//!   returned; no handle outlives the request or command that opened it.

use crate::db::{open_db, open_existing_db};
use crate::service::error::{CatalogError, CatalogResult};
use rusqlite::Connection;
use std::path::Path;

/// Opens the store at `path`, runs `work`, and releases the connection.
///
/// # Errors
/// - `StoreUnavailable` when the store cannot be opened or migrated.
/// - Whatever `work` returns otherwise.
pub fn with_store<T>(
    path: impl AsRef<Path>,
    work: impl FnOnce(&Connection) -> CatalogResult<T>,
) -> CatalogResult<T> {
    let conn = open_db(path).map_err(CatalogError::StoreUnavailable)?;
    work(&conn)
}

/// Like [`with_store`], but never creates the store.
///
/// Used by read-only surfaces, where a missing file means a misconfigured
/// path rather than an empty catalogue.
///
/// # Errors
/// - `StoreUnavailable` when the file is missing or cannot be opened.
pub fn with_existing_store<T>(
    path: impl AsRef<Path>,
    work: impl FnOnce(&Connection) -> CatalogResult<T>,
) -> CatalogResult<T> {
    let conn = open_existing_db(path).map_err(CatalogError::StoreUnavailable)?;
    work(&conn)
}
