//! Provider trait for the media library item source.

use crate::domain::entities::MediaItem;
use crate::error::AppError;
use async_trait::async_trait;

/// Provider interface for the library that owns the item records.
///
/// The engine makes no ordering assumption about the returned collections;
/// grouping output is made deterministic on the engine side.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaLibrary: Send + Sync {
    /// Lists the items below a parent scope, or the whole library when
    /// `parent_id` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the library cannot be read.
    async fn items_under<'a>(&self, parent_id: Option<&'a str>) -> Result<Vec<MediaItem>, AppError>;

    /// Resolves a person's own library record by name.
    ///
    /// Used to resolve the target of a favorite update.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(item))` if the person exists in the library
    /// - `Ok(None)` if no person matches the name
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the library cannot be read.
    async fn find_person(&self, name: &str) -> Result<Option<MediaItem>, AppError>;
}
