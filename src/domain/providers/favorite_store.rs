//! Provider trait for per-user favorite state.

use crate::error::AppError;
use async_trait::async_trait;

/// Provider interface for persisting a user's favorite flags.
///
/// The engine is a thin pass-through here: it resolves the target name via
/// the library and delegates persistence entirely to this store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    /// Sets or clears the favorite flag on a named item for one user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the state cannot be persisted.
    async fn set_favorite(
        &self,
        user_id: &str,
        item_name: &str,
        is_favorite: bool,
    ) -> Result<(), AppError>;
}
