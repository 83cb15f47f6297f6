//! Principle link domain model.

use super::principle::PrincipleId;
use serde::{Deserialize, Serialize};

/// Unordered association between two principles.
///
/// Direction is a storage detail only: a link surfaces on both endpoints.
/// Duplicate and self links are accepted as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipleLink {
    pub principle_id: PrincipleId,
    pub related_id: PrincipleId,
    /// Free-form label; currently always written as an empty string.
    pub relation_type: String,
}

impl PrincipleLink {
    /// Creates an unlabeled link between two principles.
    pub fn new(principle_id: PrincipleId, related_id: PrincipleId) -> Self {
        Self {
            principle_id,
            related_id,
            relation_type: String::new(),
        }
    }
}
