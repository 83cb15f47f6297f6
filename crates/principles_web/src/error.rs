//! HTTP mapping of catalogue failures.
//!
//! # Invariants
//! - InvalidInput maps to 400, NotFound to 404, everything else to 500.
//! - Bodies are short plain-text messages; internal details go to the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};
use principles_core::{CatalogError, RecordRef};
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum WebError {
    Catalog(CatalogError),
    Render(askama::Error),
    /// The blocking store task panicked or was cancelled.
    Task(tokio::task::JoinError),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Catalog(CatalogError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Self::Catalog(CatalogError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Catalog(CatalogError::StoreUnavailable(_) | CatalogError::StoreQuery(_))
            | Self::Render(_)
            | Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            Self::Catalog(CatalogError::InvalidInput(_)) => "Invalid ID",
            Self::Catalog(CatalogError::NotFound(RecordRef::Category(_))) => "Category not found",
            Self::Catalog(CatalogError::NotFound(_)) => "Principle not found",
            Self::Catalog(CatalogError::StoreUnavailable(_)) => "Database connection error",
            Self::Catalog(CatalogError::StoreQuery(_)) => "Database query error",
            Self::Render(_) => "Template rendering error",
            Self::Task(_) => "Internal server error",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Catalog(err) => err.code(),
            Self::Render(_) => "render_failed",
            Self::Task(_) => "task_failed",
        }
    }
}

impl Display for WebError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Catalog(err) => write!(f, "{err}"),
            Self::Render(err) => write!(f, "template render failed: {err}"),
            Self::Task(err) => write!(f, "store task failed: {err}"),
        }
    }
}

impl std::error::Error for WebError {}

impl From<CatalogError> for WebError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<askama::Error> for WebError {
    fn from(value: askama::Error) -> Self {
        Self::Render(value)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(
                "event=http_request module=web status=error http_status={} error_code={} error={}",
                status.as_u16(),
                self.code(),
                self
            );
        } else {
            warn!(
                "event=http_request module=web status=rejected http_status={} error_code={} error={}",
                status.as_u16(),
                self.code(),
                self
            );
        }

        (status, self.public_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::WebError;
    use axum::http::StatusCode;
    use principles_core::db::DbError;
    use principles_core::{CatalogError, RecordRef};

    #[test]
    fn taxonomy_maps_to_status_codes() {
        let invalid = WebError::from(CatalogError::InvalidInput("x".to_string()));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let missing = WebError::from(CatalogError::NotFound(RecordRef::Principle(3)));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let query = WebError::from(CatalogError::StoreQuery(principles_core::RepoError::Db(
            DbError::Sqlite(rusqlite::Error::InvalidQuery),
        )));
        assert_eq!(query.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn category_not_found_has_its_own_message() {
        let missing = WebError::from(CatalogError::NotFound(RecordRef::Category(3)));
        assert_eq!(missing.public_message(), "Category not found");
    }
}
