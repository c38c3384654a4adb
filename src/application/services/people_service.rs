//! People browsing and favorite marking service.

use std::sync::Arc;

use crate::domain::grouping::{PeopleIndex, RoleFilter};
use crate::domain::providers::{FavoriteStore, MediaLibrary};
use crate::error::AppError;
use serde_json::json;

/// Service exposing the library's credited people as name-indexed groups.
///
/// Grouping itself is pure; this service fetches the item snapshot from the
/// library collaborator and hands back a [`PeopleIndex`] whose group members
/// are recomputed lazily per request.
pub struct PeopleService<L: MediaLibrary, F: FavoriteStore> {
    library: Arc<L>,
    favorites: Arc<F>,
}

impl<L: MediaLibrary, F: FavoriteStore> PeopleService<L, F> {
    /// Creates a new people service.
    pub fn new(library: Arc<L>, favorites: Arc<F>) -> Self {
        Self { library, favorites }
    }

    /// Builds the name-indexed people view for a library scope.
    ///
    /// # Arguments
    ///
    /// - `parent_id` - Library scope; `None` means the whole library
    /// - `filter` - Credit roles to include; empty means no filtering
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the library cannot be read.
    pub async fn people_under(
        &self,
        parent_id: Option<&str>,
        filter: RoleFilter,
    ) -> Result<PeopleIndex, AppError> {
        let items = self.library.items_under(parent_id).await?;
        Ok(PeopleIndex::build(items, filter))
    }

    /// Marks or unmarks a person as a user favorite.
    ///
    /// Resolves the person's own library record first so the favorite is
    /// stored under the canonical name, then delegates persistence to the
    /// favorite store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no person matches the name.
    /// Returns [`AppError::Internal`] when a collaborator fails.
    pub async fn set_favorite(
        &self,
        user_id: &str,
        name: &str,
        is_favorite: bool,
    ) -> Result<(), AppError> {
        let person = self
            .library
            .find_person(name)
            .await?
            .ok_or_else(|| AppError::not_found("Person not found", json!({ "name": name })))?;

        self.favorites
            .set_favorite(user_id, &person.name, is_favorite)
            .await?;

        tracing::debug!(user_id, person = %person.name, is_favorite, "favorite state updated");
        Ok(())
    }
}
