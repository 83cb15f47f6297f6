//! Category use-case service.
//!
//! # Responsibility
//! - Assemble the landing and category page view models.

use crate::model::category::{Category, CategoryId};
use crate::model::principle::PrincipleSummary;
use crate::repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
use crate::repo::principle_repo::{PrincipleRepository, RecordRef, SqlitePrincipleRepository};
use crate::service::error::{CatalogError, CatalogResult};
use rusqlite::Connection;
use serde::Serialize;

/// Selected category together with its principles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySelection {
    pub category: Category,
    pub principles: Vec<PrincipleSummary>,
}

/// View model for the landing page (no selection) and category pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    /// Every category, for navigation.
    pub categories: Vec<Category>,
    pub selected: Option<CategorySelection>,
}

/// Category service facade over repository implementations.
pub struct CategoryService<C: CategoryRepository, P: PrincipleRepository> {
    categories: C,
    principles: P,
}

impl<'conn> CategoryService<SqliteCategoryRepository<'conn>, SqlitePrincipleRepository<'conn>> {
    /// Creates a service backed by SQLite repositories on `conn`.
    pub fn sqlite(conn: &'conn Connection) -> Self {
        Self::new(
            SqliteCategoryRepository::new(conn),
            SqlitePrincipleRepository::new(conn),
        )
    }
}

impl<C: CategoryRepository, P: PrincipleRepository> CategoryService<C, P> {
    pub fn new(categories: C, principles: P) -> Self {
        Self {
            categories,
            principles,
        }
    }

    /// Assembles the category list and, when `selected` is given, that
    /// category's principles.
    ///
    /// # Errors
    /// - `NotFound` when `selected` names a category that does not exist.
    pub fn assemble(&self, selected: Option<CategoryId>) -> CatalogResult<CategoryView> {
        let selected = match selected {
            Some(id) => {
                let category = self
                    .categories
                    .get_category(id)?
                    .ok_or(CatalogError::NotFound(RecordRef::Category(id)))?;
                let principles = self.principles.list_principles_in_category(id)?;
                Some(CategorySelection {
                    category,
                    principles,
                })
            }
            None => None,
        };

        Ok(CategoryView {
            categories: self.list_categories()?,
            selected,
        })
    }

    /// Lists every category in identifier order.
    pub fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        Ok(self.categories.list_categories()?)
    }
}
