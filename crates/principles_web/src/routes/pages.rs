use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use principles_core::CategoryService;

use crate::error::WebError;
use crate::pages::LandingPage;
use crate::routes::{render, with_request_store};
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(landing))
}

async fn landing(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    let view = with_request_store(&state, |conn| CategoryService::sqlite(conn).assemble(None)).await?;

    render(&LandingPage {
        categories: view.categories,
    })
}
