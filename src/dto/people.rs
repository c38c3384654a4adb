//! Caller-facing request and response shapes for people browsing.

use crate::domain::grouping::{PeopleIndex, RoleFilter};
use serde::{Deserialize, Serialize};

/// Query for the people listing of a library scope.
#[derive(Debug, Deserialize)]
pub struct PeopleQuery {
    pub user_id: String,

    /// Library scope to list under; absent means the whole library.
    #[serde(default)]
    pub parent_id: Option<String>,

    /// Comma-separated credit roles to include, e.g. `"Actor,Director"`.
    /// Blank or whitespace-only entries degrade to no filtering.
    #[serde(default)]
    pub person_types: Option<String>,
}

impl PeopleQuery {
    /// Parses the raw role list into the typed filter the engine consumes.
    pub fn role_filter(&self) -> RoleFilter {
        RoleFilter::parse(self.person_types.as_deref())
    }
}

/// Request to mark or unmark a person as a user favorite.
#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub user_id: String,
    pub name: String,
}

/// One people group in a listing response.
#[derive(Debug, Serialize)]
pub struct PersonEntry {
    pub name: String,
    pub item_count: usize,
}

/// People listing response.
#[derive(Debug, Serialize)]
pub struct PeopleResponse {
    pub items: Vec<PersonEntry>,
    pub total: usize,
}

impl PeopleResponse {
    /// Materializes a response from an index, counting each group's members
    /// through the index's deferred filter.
    pub fn from_index(index: &PeopleIndex) -> Self {
        let items: Vec<PersonEntry> = index
            .names()
            .iter()
            .map(|name| PersonEntry {
                name: name.clone(),
                item_count: index.members(name).len(),
            })
            .collect();
        let total = items.len();
        Self { items, total }
    }
}
