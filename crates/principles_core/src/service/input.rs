//! Parsing of identifiers and optional fields typed by clients.
//!
//! # Invariants
//! - Identifiers are positive integers; anything else is `InvalidInput`.
//! - Category values on write paths never fail: unparsable means "none".

use crate::model::category::CategoryId;
use crate::model::principle::{CategoryChange, PrincipleId};
use crate::service::error::{CatalogError, CatalogResult};

fn parse_positive(raw: &str) -> CatalogResult<i64> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(CatalogError::InvalidInput(format!(
            "`{trimmed}` is not a positive integer id"
        ))),
    }
}

/// Parses a required principle identifier.
pub fn parse_id(raw: &str) -> CatalogResult<PrincipleId> {
    parse_positive(raw)
}

/// Parses an optional principle identifier; a missing or blank value yields
/// `None`.
pub fn parse_optional_id(raw: Option<&str>) -> CatalogResult<Option<PrincipleId>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_id(value).map(Some),
    }
}

/// Parses a required category identifier, as addressed by the category page.
pub fn parse_required_category_id(raw: &str) -> CatalogResult<CategoryId> {
    parse_positive(raw)
}

/// Parses a category reference for inserts and updates.
///
/// Returns `None` when the value is blank, unparsable or non-positive.
pub fn parse_category_id(raw: &str) -> Option<CategoryId> {
    parse_positive(raw).ok()
}

/// Parses the category prompt of an edit: blank keeps the stored reference.
pub fn parse_category_change(raw: &str) -> CategoryChange {
    if raw.trim().is_empty() {
        CategoryChange::Keep
    } else {
        CategoryChange::Set(parse_category_id(raw))
    }
}

/// Returns the trimmed value, or `None` when it is blank.
pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
