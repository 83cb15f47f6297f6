//! Principle repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide lookup, neighbor, listing and write APIs over `principles`.
//! - Resolve category names through a left join, leaving the fallback label
//!   to callers.
//!
//! # Invariants
//! - Neighbor lookups follow identifier order and return `None` at the ends.
//! - Listings are ordered by identifier ascending.

use crate::db::DbError;
use crate::model::category::CategoryId;
use crate::model::principle::{
    CategorizedPrinciple, NewPrinciple, Principle, PrincipleId, PrincipleSummary,
};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PRINCIPLE_SELECT_SQL: &str = "SELECT
    p.id AS id,
    p.title AS title,
    p.description AS description,
    p.category_id AS category_id,
    c.name AS category_name
FROM principles p
LEFT JOIN categories c ON c.id = p.category_id";

pub type RepoResult<T> = Result<T, RepoError>;

/// Record addressed by a failed lookup or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRef {
    Principle(PrincipleId),
    Category(CategoryId),
    /// The lowest-identifier principle, requested while none is stored.
    FirstPrinciple,
}

impl Display for RecordRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Principle(id) => write!(f, "principle {id}"),
            Self::Category(id) => write!(f, "category {id}"),
            Self::FirstPrinciple => write!(f, "first principle"),
        }
    }
}

/// Generic repository error for catalogue persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(RecordRef),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(record) => write!(f, "{record} not found"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for principle reads and writes.
pub trait PrincipleRepository {
    /// Gets one principle with its resolved category name.
    fn get_principle(&self, id: PrincipleId) -> RepoResult<Option<CategorizedPrinciple>>;
    /// Returns the lowest stored identifier.
    fn first_principle_id(&self) -> RepoResult<Option<PrincipleId>>;
    /// Returns the greatest stored identifier strictly below `id`.
    fn previous_principle_id(&self, id: PrincipleId) -> RepoResult<Option<PrincipleId>>;
    /// Returns the smallest stored identifier strictly above `id`.
    fn next_principle_id(&self, id: PrincipleId) -> RepoResult<Option<PrincipleId>>;
    /// Lists every principle with its resolved category name.
    fn list_principles(&self) -> RepoResult<Vec<CategorizedPrinciple>>;
    /// Lists identifier and title of every principle referencing `category_id`.
    fn list_principles_in_category(
        &self,
        category_id: CategoryId,
    ) -> RepoResult<Vec<PrincipleSummary>>;
    /// Inserts a principle and returns its assigned identifier.
    fn create_principle(&self, principle: &NewPrinciple) -> RepoResult<PrincipleId>;
    /// Overwrites title, description and category of an existing principle.
    fn update_principle(&self, principle: &Principle) -> RepoResult<()>;
}

/// SQLite-backed principle repository.
pub struct SqlitePrincipleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePrincipleRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PrincipleRepository for SqlitePrincipleRepository<'_> {
    fn get_principle(&self, id: PrincipleId) -> RepoResult<Option<CategorizedPrinciple>> {
        let principle = self
            .conn
            .query_row(
                &format!("{PRINCIPLE_SELECT_SQL} WHERE p.id = ?1;"),
                [id],
                parse_categorized_row,
            )
            .optional()?;
        Ok(principle)
    }

    fn first_principle_id(&self) -> RepoResult<Option<PrincipleId>> {
        let id = self
            .conn
            .query_row("SELECT MIN(id) FROM principles;", [], |row| row.get(0))?;
        Ok(id)
    }

    fn previous_principle_id(&self, id: PrincipleId) -> RepoResult<Option<PrincipleId>> {
        let previous = self.conn.query_row(
            "SELECT MAX(id) FROM principles WHERE id < ?1;",
            [id],
            |row| row.get(0),
        )?;
        Ok(previous)
    }

    fn next_principle_id(&self, id: PrincipleId) -> RepoResult<Option<PrincipleId>> {
        let next = self.conn.query_row(
            "SELECT MIN(id) FROM principles WHERE id > ?1;",
            [id],
            |row| row.get(0),
        )?;
        Ok(next)
    }

    fn list_principles(&self) -> RepoResult<Vec<CategorizedPrinciple>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PRINCIPLE_SELECT_SQL} ORDER BY p.id ASC;"))?;
        let rows = stmt.query_map([], parse_categorized_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    fn list_principles_in_category(
        &self,
        category_id: CategoryId,
    ) -> RepoResult<Vec<PrincipleSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title
             FROM principles
             WHERE category_id = ?1
             ORDER BY id ASC;",
        )?;
        let rows = stmt.query_map([category_id], |row| {
            Ok(PrincipleSummary {
                id: row.get("id")?,
                title: row.get("title")?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    fn create_principle(&self, principle: &NewPrinciple) -> RepoResult<PrincipleId> {
        self.conn.execute(
            "INSERT INTO principles (title, description, category_id)
             VALUES (?1, ?2, ?3);",
            params![
                principle.title.as_str(),
                principle.description.as_str(),
                principle.category_id,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_principle(&self, principle: &Principle) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE principles
             SET
                title = ?1,
                description = ?2,
                category_id = ?3
             WHERE id = ?4;",
            params![
                principle.title.as_str(),
                principle.description.as_str(),
                principle.category_id,
                principle.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(RecordRef::Principle(principle.id)));
        }

        Ok(())
    }
}

/// Maps one row shaped like [`PRINCIPLE_SELECT_SQL`].
pub(crate) fn parse_categorized_row(row: &Row<'_>) -> rusqlite::Result<CategorizedPrinciple> {
    Ok(CategorizedPrinciple {
        principle: Principle {
            id: row.get("id")?,
            title: row.get("title")?,
            description: row.get("description")?,
            category_id: row.get("category_id")?,
        },
        category_name: row.get("category_name")?,
    })
}
