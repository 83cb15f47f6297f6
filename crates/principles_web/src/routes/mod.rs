pub mod assets;
pub mod category;
pub mod pages;
pub mod principle;

use crate::error::WebError;
use crate::AppState;
use askama::Template;
use axum::response::Html;
use principles_core::{with_existing_store, CatalogResult};
use rusqlite::Connection;
use serde::Deserialize;

/// Query string of pages addressed by an optional `id`.
///
/// Kept as raw text so malformed values surface as `InvalidInput`.
#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}

/// Runs `work` against a connection opened for this request only.
///
/// The store is never created here: a missing file is `StoreUnavailable`.
///
/// The connection lives on a blocking thread and is dropped before the
/// result is handed back to the async handler.
pub async fn with_request_store<T, F>(state: &AppState, work: F) -> Result<T, WebError>
where
    T: Send + 'static,
    F: FnOnce(&Connection) -> CatalogResult<T> + Send + 'static,
{
    let db_path = state.db_path.clone();
    let result = tokio::task::spawn_blocking(move || with_existing_store(&db_path, work))
        .await
        .map_err(WebError::Task)?;
    Ok(result?)
}

pub fn render(page: &impl Template) -> Result<Html<String>, WebError> {
    Ok(Html(page.render()?))
}
