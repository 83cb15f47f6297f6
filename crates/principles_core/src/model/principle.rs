//! Principle domain model.
//!
//! # Responsibility
//! - Define the stored principle record and its read projections.
//! - Merge console edits into a stored record.
//!
//! # Invariants
//! - `category_id = None` means "no category"; it is never encoded as zero.
//! - Edits replace a field only when a new value is provided.

use super::category::CategoryId;
use serde::{Deserialize, Serialize};

/// Integer identifier of a principle row. Valid identifiers are positive.
pub type PrincipleId = i64;

/// Display label for principles without a resolvable category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Stored principle record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principle {
    pub id: PrincipleId,
    pub title: String,
    /// May contain markup; rendered as stored.
    pub description: String,
    pub category_id: Option<CategoryId>,
}

/// Insert request for a new principle. The identifier is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPrinciple {
    pub title: String,
    pub description: String,
    pub category_id: Option<CategoryId>,
}

/// Principle joined with the name of its category.
///
/// `category_name` is `None` both when the principle has no category and
/// when its reference dangles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedPrinciple {
    pub principle: Principle,
    pub category_name: Option<String>,
}

impl CategorizedPrinciple {
    /// Returns the category name, or [`UNCATEGORIZED`].
    pub fn category_label(&self) -> &str {
        self.category_name.as_deref().unwrap_or(UNCATEGORIZED)
    }
}

/// Identifier and title only, for category listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipleSummary {
    pub id: PrincipleId,
    pub title: String,
}

/// Change to a principle's category made by an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryChange {
    /// Keep the stored reference.
    #[default]
    Keep,
    /// Replace the stored reference; `None` clears it.
    Set(Option<CategoryId>),
}

/// Replace-if-provided edit of a principle.
///
/// `None` fields keep the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrincipleEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: CategoryChange,
}

impl PrincipleEdit {
    /// Returns whether applying this edit leaves every field unchanged.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.category == CategoryChange::Keep
    }

    /// Merges this edit over `current` and returns the record to store.
    pub fn apply(&self, current: &Principle) -> Principle {
        let category_id = match self.category {
            CategoryChange::Keep => current.category_id,
            CategoryChange::Set(category_id) => category_id,
        };

        Principle {
            id: current.id,
            title: self
                .title
                .clone()
                .unwrap_or_else(|| current.title.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| current.description.clone()),
            category_id,
        }
    }
}
