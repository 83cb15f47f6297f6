//! Read-only web surface for the principles catalogue.
//!
//! # Responsibility
//! - Route landing, principle, category and stylesheet requests.
//! - Open one store connection per request and release it before rendering.

pub mod config;
pub mod error;
mod pages;
pub mod routes;

use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;

pub use config::WebConfig;
pub use error::WebError;

/// Shared, read-only state of the web server.
///
/// Holds the store location rather than a connection: handles are opened per
/// request.
pub struct AppState {
    pub db_path: PathBuf,
    pub stylesheet_path: PathBuf,
}

impl AppState {
    /// Builds state from configuration.
    ///
    /// # Errors
    /// - Returns an error when the store or the stylesheet is missing.
    pub fn load(config: &WebConfig) -> Result<Self, String> {
        let db_path = config.catalog.db_path.clone();
        if !db_path.is_file() {
            return Err(format!("store `{}` does not exist", db_path.display()));
        }

        let stylesheet_path = config.stylesheet_path();
        if !stylesheet_path.is_file() {
            return Err(format!(
                "stylesheet `{}` does not exist",
                stylesheet_path.display()
            ));
        }

        Ok(Self {
            db_path,
            stylesheet_path,
        })
    }
}

/// Builds the application router over `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::pages::router())
        .merge(routes::principle::router())
        .merge(routes::category::router())
        .merge(routes::assets::router(&state.stylesheet_path))
        .with_state(Arc::new(state))
}
