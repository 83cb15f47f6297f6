//! Core domain logic for the principles catalogue.
//! This crate owns storage, queries and view-model assembly shared by the
//! web server and the admin console.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::CatalogConfig;
pub use logging::{default_log_level, init_logging, logging_status, ActiveSink, LogSink};
pub use model::category::{Category, CategoryId};
pub use model::link::PrincipleLink;
pub use model::principle::{
    CategorizedPrinciple, CategoryChange, NewPrinciple, Principle, PrincipleEdit, PrincipleId,
    PrincipleSummary, UNCATEGORIZED,
};
pub use repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
pub use repo::link_repo::{LinkRepository, SqliteLinkRepository};
pub use repo::principle_repo::{
    PrincipleRepository, RecordRef, RepoError, RepoResult, SqlitePrincipleRepository,
};
pub use service::category_service::{CategorySelection, CategoryService, CategoryView};
pub use service::error::{CatalogError, CatalogResult};
pub use service::principle_service::{LinkedPrinciple, PrincipleService, PrincipleView};
pub use service::store::{with_existing_store, with_store};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
