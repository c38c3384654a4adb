//! Remote artwork aggregation service.

use std::sync::Arc;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::domain::entities::{ArtworkCandidate, ArtworkCategory, ArtworkKind, MediaItem};
use crate::domain::languages::LanguageMap;
use crate::domain::providers::{ArtworkProvider, RemoteArtwork};
use crate::domain::ranking;
use crate::error::AppError;
use crate::utils::resolution::parse_resolution;

/// Outcome of one category query, collected before merging.
///
/// Keeping success and failure as plain data makes the per-category
/// isolation testable without inspecting logs.
#[derive(Debug)]
struct CategoryFetch {
    position: usize,
    category: ArtworkCategory,
    outcome: Result<Vec<RemoteArtwork>, AppError>,
}

/// Service that aggregates, annotates, and ranks remote artwork.
///
/// One aggregation call issues an independent upstream query per category in
/// [`ArtworkCategory::ALL`]. Partial success is the normal case: a failing
/// category is logged and excluded without affecting its siblings, and the
/// merged result is ranked before being returned.
pub struct ArtworkService<P: ArtworkProvider> {
    provider: Arc<P>,
    base_url: String,
}

impl<P: ArtworkProvider + 'static> ArtworkService<P> {
    /// Creates a new artwork service.
    ///
    /// `base_url` is prefixed to the relative artwork paths the remote
    /// source returns; it must end with a slash.
    pub fn new(provider: Arc<P>, base_url: impl Into<String>) -> Self {
        Self {
            provider,
            base_url: base_url.into(),
        }
    }

    /// The artwork kinds an aggregation call can produce.
    pub fn supported_kinds(&self) -> [ArtworkKind; 3] {
        [
            ArtworkKind::Primary,
            ArtworkKind::Banner,
            ArtworkKind::Backdrop,
        ]
    }

    /// Aggregates, annotates, and ranks remote artwork for one item.
    ///
    /// Returns an empty list when the item carries no usable remote id;
    /// that is not an error. When `cancel` fires, in-flight category
    /// fetches are abandoned and whatever already completed is ranked and
    /// returned.
    pub async fn artwork_for(
        &self,
        item: &MediaItem,
        preferred_language: &str,
        cancel: &CancellationToken,
    ) -> Vec<ArtworkCandidate> {
        let Some(series_id) = self.remote_id(item) else {
            tracing::debug!(item = %item.name, "item has no usable remote id, skipping artwork lookup");
            return Vec::new();
        };

        let languages = tokio::select! {
            _ = cancel.cancelled() => return Vec::new(),
            result = self.provider.languages() => match result {
                Ok(entries) => LanguageMap::new(entries),
                Err(e) => {
                    tracing::warn!(error = %e, "language table unavailable, candidate languages stay unresolved");
                    LanguageMap::empty()
                }
            },
        };

        let mut tasks = JoinSet::new();
        for (position, category) in ArtworkCategory::ALL.into_iter().enumerate() {
            let provider = Arc::clone(&self.provider);
            let preferred = preferred_language.to_string();
            tasks.spawn(async move {
                let outcome = provider.artwork(series_id, category, &preferred).await;
                CategoryFetch {
                    position,
                    category,
                    outcome,
                }
            });
        }

        let mut fetches: Vec<CategoryFetch> = Vec::with_capacity(ArtworkCategory::ALL.len());
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!(series_id, "artwork aggregation cancelled, keeping completed categories");
                    tasks.abort_all();
                    break;
                }
                joined = tasks.join_next() => match joined {
                    Some(Ok(fetch)) => fetches.push(fetch),
                    Some(Err(e)) => tracing::warn!(series_id, error = %e, "artwork fetch task aborted"),
                    None => break,
                },
            }
        }

        // Merge in the fixed category order so ranking ties are reproducible
        // regardless of completion order.
        fetches.sort_by_key(|f| f.position);

        let mut merged = Vec::new();
        for fetch in fetches {
            match fetch.outcome {
                Ok(raw) => {
                    merged.extend(raw.into_iter().map(|r| self.to_candidate(r, &languages)));
                }
                Err(e) => tracing::error!(
                    category = %fetch.category,
                    series_id,
                    error = %e,
                    "failed to retrieve artwork category"
                ),
            }
        }

        ranking::rank(merged, preferred_language)
    }

    /// Resolves the item's positive numeric remote id, if it carries one.
    fn remote_id(&self, item: &MediaItem) -> Option<u32> {
        item.provider_id(self.provider.provider_id_key())?
            .parse::<u32>()
            .ok()
            .filter(|id| *id > 0)
    }

    /// Annotates one raw record into a candidate.
    ///
    /// A malformed resolution token or an unknown category tag drops that
    /// field only; the candidate itself is kept.
    fn to_candidate(&self, raw: RemoteArtwork, languages: &LanguageMap) -> ArtworkCandidate {
        let language = raw
            .language_id
            .and_then(|id| languages.resolve(id))
            .map(str::to_string);

        let (width, height) = match raw.resolution.as_deref().map(parse_resolution) {
            Some(Ok((w, h))) => (Some(w), Some(h)),
            _ => (None, None),
        };

        ArtworkCandidate {
            url: format!("{}{}", self.base_url, raw.file_name),
            thumbnail_url: format!("{}{}", self.base_url, raw.thumbnail),
            kind: ArtworkKind::from_tag(&raw.key_type),
            language,
            width,
            height,
            community_rating: raw.ratings_info.average,
            vote_count: raw.ratings_info.count,
            provider: self.provider.name(),
        }
    }
}
