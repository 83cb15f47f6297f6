use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeFile;

use crate::AppState;

/// `GET /style.css`, served from the configured static directory.
pub fn router(stylesheet_path: &Path) -> Router<Arc<AppState>> {
    Router::new().route_service("/style.css", ServeFile::new(stylesheet_path))
}
