//! Query layer: repository contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every repository method issues exactly one statement.
//! - No statement mutates more than one table.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod category_repo;
pub mod link_repo;
pub mod principle_repo;
