//! Principle link repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist links between principles.
//! - Resolve the principles linked to one principle in either direction.
//!
//! # Invariants
//! - `linked_principles` yields one entry per stored link touching the
//!   principle, in insertion order. A self link yields the principle once.
//! - Links whose other endpoint does not exist are skipped.
//! - Writes do not check uniqueness or endpoint existence.

use crate::model::link::PrincipleLink;
use crate::model::principle::{CategorizedPrinciple, PrincipleId};
use crate::repo::principle_repo::{parse_categorized_row, RepoResult};
use rusqlite::{params, Connection};

/// Repository interface for link reads and writes.
pub trait LinkRepository {
    fn create_link(&self, link: &PrincipleLink) -> RepoResult<()>;
    /// Returns the principles on the other end of every link touching `id`.
    fn linked_principles(&self, id: PrincipleId) -> RepoResult<Vec<CategorizedPrinciple>>;
}

/// SQLite-backed link repository.
pub struct SqliteLinkRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLinkRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl LinkRepository for SqliteLinkRepository<'_> {
    fn create_link(&self, link: &PrincipleLink) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO principle_links (principle_id, related_id, relation_type)
             VALUES (?1, ?2, ?3);",
            params![link.principle_id, link.related_id, link.relation_type.as_str()],
        )?;
        Ok(())
    }

    fn linked_principles(&self, id: PrincipleId) -> RepoResult<Vec<CategorizedPrinciple>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                p.id AS id,
                p.title AS title,
                p.description AS description,
                p.category_id AS category_id,
                c.name AS category_name
             FROM principle_links l
             JOIN principles p
               ON p.id = CASE
                    WHEN l.principle_id = ?1 THEN l.related_id
                    ELSE l.principle_id
                  END
             LEFT JOIN categories c ON c.id = p.category_id
             WHERE l.principle_id = ?1 OR l.related_id = ?1
             ORDER BY l.rowid ASC;",
        )?;
        let rows = stmt.query_map([id], parse_categorized_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}
