//! Askama page templates and their construction from view models.
//!
//! Neighbor identifiers are flattened to `0` here: the templates hide the
//! previous/next links when the value is zero.

use askama::Template;
use principles_core::{Category, CategorySelection, PrincipleSummary, PrincipleView};

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingPage {
    pub categories: Vec<Category>,
}

#[derive(Template)]
#[template(path = "principle.html")]
pub struct PrinciplePage {
    pub view: PrincipleView,
    pub previous_id: i64,
    pub next_id: i64,
}

impl From<PrincipleView> for PrinciplePage {
    fn from(view: PrincipleView) -> Self {
        Self {
            previous_id: view.previous_id.unwrap_or(0),
            next_id: view.next_id.unwrap_or(0),
            view,
        }
    }
}

#[derive(Template)]
#[template(path = "category.html")]
pub struct CategoryPage {
    pub categories: Vec<Category>,
    pub category: Category,
    pub principles: Vec<PrincipleSummary>,
}

impl CategoryPage {
    pub fn new(categories: Vec<Category>, selection: CategorySelection) -> Self {
        Self {
            categories,
            category: selection.category,
            principles: selection.principles,
        }
    }
}
