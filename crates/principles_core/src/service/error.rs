//! Error taxonomy shared by the web and console surfaces.
//!
//! # Invariants
//! - Every variant is terminal for the current request or command.
//! - Absent neighbors are not errors and never reach this type.

use crate::db::DbError;
use crate::repo::principle_repo::{RecordRef, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure of a catalogue request or command.
#[derive(Debug)]
pub enum CatalogError {
    /// Malformed or non-positive identifier supplied by a client.
    InvalidInput(String),
    /// Requested principle or category does not exist.
    NotFound(RecordRef),
    /// Store could not be opened.
    StoreUnavailable(DbError),
    /// A statement failed during an otherwise valid request.
    StoreQuery(RepoError),
}

impl CatalogError {
    /// Stable short code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::NotFound(_) => "not_found",
            Self::StoreUnavailable(_) => "store_unavailable",
            Self::StoreQuery(_) => "store_query_failed",
        }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::NotFound(record) => write!(f, "{record} not found"),
            Self::StoreUnavailable(err) => write!(f, "store unavailable: {err}"),
            Self::StoreQuery(err) => write!(f, "store query failed: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StoreUnavailable(err) => Some(err),
            Self::StoreQuery(err) => Some(err),
            Self::InvalidInput(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<RepoError> for CatalogError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(record) => Self::NotFound(record),
            other => Self::StoreQuery(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogError;
    use crate::db::DbError;
    use crate::repo::principle_repo::{RecordRef, RepoError};

    #[test]
    fn repo_not_found_maps_to_not_found() {
        let err = CatalogError::from(RepoError::NotFound(RecordRef::Principle(9)));
        assert!(matches!(err, CatalogError::NotFound(RecordRef::Principle(9))));
        assert_eq!(err.to_string(), "principle 9 not found");
    }

    #[test]
    fn repo_db_error_maps_to_store_query() {
        let err = CatalogError::from(RepoError::Db(DbError::Sqlite(
            rusqlite::Error::InvalidQuery,
        )));
        assert_eq!(err.code(), "store_query_failed");
    }
}
