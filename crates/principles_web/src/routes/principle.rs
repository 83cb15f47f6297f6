use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use principles_core::service::input::parse_optional_id;
use principles_core::PrincipleService;

use crate::error::WebError;
use crate::pages::PrinciplePage;
use crate::routes::{render, with_request_store, IdParams};
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/principle", get(principle_page))
}

/// `GET /principle?id=<int>`; without `id` the lowest identifier is shown.
async fn principle_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdParams>,
) -> Result<Html<String>, WebError> {
    let requested = parse_optional_id(params.id.as_deref())?;
    let view = with_request_store(&state, move |conn| {
        PrincipleService::sqlite(conn).view(requested)
    })
    .await?;

    render(&PrinciplePage::from(view))
}
