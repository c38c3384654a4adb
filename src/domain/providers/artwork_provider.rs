//! Provider trait for the remote artwork source.

use crate::domain::entities::ArtworkCategory;
use crate::error::AppError;
use async_trait::async_trait;
use serde::Deserialize;

/// Community rating block attached to a raw artwork record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatingsInfo {
    pub average: Option<f64>,
    pub count: Option<u32>,
}

/// Raw artwork descriptor as returned by the remote source.
///
/// Field names follow the upstream wire format. `file_name` and `thumbnail`
/// are paths relative to the configured artwork base URL.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteArtwork {
    pub key_type: String,
    pub file_name: String,
    pub thumbnail: String,
    /// Resolution token in `"WxH"` form; may be absent or malformed.
    #[serde(default)]
    pub resolution: Option<String>,
    /// Numeric language id in the provider's own numbering.
    #[serde(default)]
    pub language_id: Option<i64>,
    #[serde(default)]
    pub ratings_info: RatingsInfo,
}

/// One entry of the provider's language table.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageEntry {
    pub id: i64,
    pub abbreviation: String,
}

/// Provider interface for a remote artwork/metadata source.
///
/// Implementations own transport, authentication, retry/backoff and response
/// decoding; the engine only consumes decoded records. Instances are
/// constructed by the caller and injected - provider lifecycle belongs to
/// the calling context, never to a global.
///
/// # Implementations
///
/// - Production implementations live with the embedding application
/// - Test mocks available with `cfg(test)`; in-memory fakes in `tests/common`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArtworkProvider: Send + Sync {
    /// Display name attached to every candidate produced from this source.
    fn name(&self) -> &'static str;

    /// Key under which this provider's external id is stored on a
    /// [`crate::domain::entities::MediaItem`].
    fn provider_id_key(&self) -> &'static str;

    /// Fetches the raw artwork records for one category of one subject.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport, decoding, or not-found
    /// failures. The caller treats each category independently.
    async fn artwork(
        &self,
        series_id: u32,
        category: ArtworkCategory,
        preferred_language: &str,
    ) -> Result<Vec<RemoteArtwork>, AppError>;

    /// Returns the provider's numeric-id-to-code language table.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the listing cannot be retrieved.
    async fn languages(&self) -> Result<Vec<LanguageEntry>, AppError>;
}
