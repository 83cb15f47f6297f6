//! Category repository contracts and SQLite implementation.
//!
//! Categories are read-only from the application's point of view.

use crate::model::category::{Category, CategoryId};
use crate::repo::principle_repo::RepoResult;
use rusqlite::{Connection, OptionalExtension, Row};

/// Repository interface for category reads.
pub trait CategoryRepository {
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    /// Lists every category ordered by identifier.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let category = self
            .conn
            .query_row(
                "SELECT id, name FROM categories WHERE id = ?1;",
                [id],
                parse_category_row,
            )
            .optional()?;
        Ok(category)
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY id ASC;")?;
        let rows = stmt.query_map([], parse_category_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

fn parse_category_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
