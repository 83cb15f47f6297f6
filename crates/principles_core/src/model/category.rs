//! Category domain model.

use serde::{Deserialize, Serialize};

/// Integer identifier of a category row.
pub type CategoryId = i64;

/// Named grouping referenced by principles.
///
/// Categories are created outside the application surfaces; the catalogue
/// only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}
