//! Principle use-case service.
//!
//! # Responsibility
//! - Assemble the principle page view model from four reads: the record,
//!   its previous and next identifiers, and its linked principles.
//! - Provide the console's list/add/edit/link use-cases.
//!
//! # Invariants
//! - A missing neighbor is `None`, never an error.
//! - Edits are merged here, not in storage: blank fields keep stored values.
//! - Every write is a single statement issued as the last step.

use crate::model::link::PrincipleLink;
use crate::model::principle::{
    CategorizedPrinciple, NewPrinciple, Principle, PrincipleEdit, PrincipleId,
};
use crate::repo::link_repo::{LinkRepository, SqliteLinkRepository};
use crate::repo::principle_repo::{PrincipleRepository, RecordRef, SqlitePrincipleRepository};
use crate::service::error::{CatalogError, CatalogResult};
use log::{debug, info};
use rusqlite::Connection;
use serde::Serialize;

/// Principle as it appears in another principle's linked list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedPrinciple {
    pub id: PrincipleId,
    pub title: String,
    pub description: String,
    pub category: String,
}

impl From<CategorizedPrinciple> for LinkedPrinciple {
    fn from(value: CategorizedPrinciple) -> Self {
        let category = value.category_label().to_string();
        Self {
            id: value.principle.id,
            title: value.principle.title,
            description: value.principle.description,
            category,
        }
    }
}

/// View model for the principle page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrincipleView {
    pub id: PrincipleId,
    pub title: String,
    pub description: String,
    /// Resolved category name, `"Uncategorized"` when absent or dangling.
    pub category: String,
    pub previous_id: Option<PrincipleId>,
    pub next_id: Option<PrincipleId>,
    pub linked: Vec<LinkedPrinciple>,
}

/// Principle service facade over repository implementations.
pub struct PrincipleService<P: PrincipleRepository, L: LinkRepository> {
    principles: P,
    links: L,
}

impl<'conn> PrincipleService<SqlitePrincipleRepository<'conn>, SqliteLinkRepository<'conn>> {
    /// Creates a service backed by SQLite repositories on `conn`.
    pub fn sqlite(conn: &'conn Connection) -> Self {
        Self::new(
            SqlitePrincipleRepository::new(conn),
            SqliteLinkRepository::new(conn),
        )
    }
}

impl<P: PrincipleRepository, L: LinkRepository> PrincipleService<P, L> {
    pub fn new(principles: P, links: L) -> Self {
        Self { principles, links }
    }

    /// Assembles the principle page for `requested`, or for the lowest
    /// identifier when `requested` is `None`.
    ///
    /// # Errors
    /// - `NotFound` when the resolved principle does not exist, including the
    ///   case of an empty catalogue with no identifier requested.
    pub fn view(&self, requested: Option<PrincipleId>) -> CatalogResult<PrincipleView> {
        let id = match requested {
            Some(id) => id,
            None => self
                .principles
                .first_principle_id()?
                .ok_or(CatalogError::NotFound(RecordRef::FirstPrinciple))?,
        };

        let entry = self.entry(id)?;
        let previous_id = self.principles.previous_principle_id(id)?;
        let next_id = self.principles.next_principle_id(id)?;
        let linked = self
            .links
            .linked_principles(id)?
            .into_iter()
            .map(LinkedPrinciple::from)
            .collect::<Vec<_>>();

        debug!(
            "event=principle_view module=service status=ok id={} linked={}",
            id,
            linked.len()
        );

        let category = entry.category_label().to_string();
        Ok(PrincipleView {
            id,
            title: entry.principle.title,
            description: entry.principle.description,
            category,
            previous_id,
            next_id,
            linked,
        })
    }

    /// Gets one principle with its category name, failing when absent.
    pub fn entry(&self, id: PrincipleId) -> CatalogResult<CategorizedPrinciple> {
        self.principles
            .get_principle(id)?
            .ok_or(CatalogError::NotFound(RecordRef::Principle(id)))
    }

    /// Lists every principle in identifier order.
    pub fn list(&self) -> CatalogResult<Vec<CategorizedPrinciple>> {
        Ok(self.principles.list_principles()?)
    }

    /// Inserts a new principle and returns its identifier.
    pub fn add(&self, principle: &NewPrinciple) -> CatalogResult<PrincipleId> {
        let id = self.principles.create_principle(principle)?;
        info!(
            "event=principle_add module=service status=ok id={} has_category={}",
            id,
            principle.category_id.is_some()
        );
        Ok(id)
    }

    /// Merges `edit` over the stored principle `id` and writes the result.
    ///
    /// Returns the record as stored after the edit.
    pub fn edit(&self, id: PrincipleId, edit: &PrincipleEdit) -> CatalogResult<Principle> {
        let current = self.entry(id)?.principle;
        let merged = edit.apply(&current);
        self.principles.update_principle(&merged)?;
        info!(
            "event=principle_edit module=service status=ok id={} title_changed={} description_changed={} category_changed={}",
            id,
            merged.title != current.title,
            merged.description != current.description,
            merged.category_id != current.category_id
        );
        Ok(merged)
    }

    /// Records a link between two principles.
    ///
    /// Duplicate and self links are stored as given; endpoints are not
    /// checked for existence.
    pub fn link(&self, principle_id: PrincipleId, related_id: PrincipleId) -> CatalogResult<()> {
        self.links
            .create_link(&PrincipleLink::new(principle_id, related_id))?;
        info!(
            "event=principle_link module=service status=ok principle_id={} related_id={}",
            principle_id, related_id
        );
        Ok(())
    }
}
