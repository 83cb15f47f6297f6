use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use principles_core::service::input::parse_required_category_id;
use principles_core::{CatalogError, CategoryService, RecordRef};

use crate::error::WebError;
use crate::pages::CategoryPage;
use crate::routes::{render, with_request_store, IdParams};
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/category", get(category_page))
}

/// `GET /category?id=<int>`; `id` is required.
async fn category_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdParams>,
) -> Result<Html<String>, WebError> {
    let raw = params
        .id
        .as_deref()
        .ok_or_else(|| CatalogError::InvalidInput("missing category id".to_string()))?;
    let id = parse_required_category_id(raw)?;

    let view = with_request_store(&state, move |conn| {
        CategoryService::sqlite(conn).assemble(Some(id))
    })
    .await?;
    let selection = view
        .selected
        .ok_or(CatalogError::NotFound(RecordRef::Category(id)))?;

    render(&CategoryPage::new(view.categories, selection))
}
