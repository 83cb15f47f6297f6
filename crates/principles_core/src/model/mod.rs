//! Domain model for the principles catalogue.
//!
//! # Responsibility
//! - Define the records stored in the three catalogue relations.
//! - Own the replace-if-provided merge used by principle edits.
//!
//! # Invariants
//! - Principles are totally ordered by their integer identifier.
//! - A principle's category reference is optional and may dangle.

pub mod category;
pub mod link;
pub mod principle;
