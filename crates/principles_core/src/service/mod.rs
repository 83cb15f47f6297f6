//! Catalogue use-case services.
//!
//! # Responsibility
//! - Assemble view models for the principle and category pages.
//! - Orchestrate console mutations on top of repository contracts.
//! - Keep web and console layers decoupled from storage details.

pub mod category_service;
pub mod error;
pub mod input;
pub mod principle_service;
pub mod store;
