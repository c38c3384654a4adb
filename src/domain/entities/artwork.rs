//! Artwork candidate entity and its classification types.

use serde::Serialize;
use std::fmt;

/// The slot an artwork candidate fills once attached to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArtworkKind {
    Primary,
    Banner,
    Backdrop,
}

impl ArtworkKind {
    /// Maps a raw upstream category tag to a kind, case-insensitively.
    ///
    /// Unrecognized tags map to `None`; the candidate is kept without a kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("poster") {
            Some(ArtworkKind::Primary)
        } else if tag.eq_ignore_ascii_case("series") {
            Some(ArtworkKind::Banner)
        } else if tag.eq_ignore_ascii_case("fanart") {
            Some(ArtworkKind::Backdrop)
        } else {
            None
        }
    }
}

/// One upstream query unit: the remote source is asked for each category
/// in [`ArtworkCategory::ALL`] independently, and the results are unioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkCategory {
    Poster,
    Series,
    Fanart,
}

impl ArtworkCategory {
    /// The fixed, ordered set of categories queried per aggregation call.
    pub const ALL: [ArtworkCategory; 3] = [
        ArtworkCategory::Poster,
        ArtworkCategory::Series,
        ArtworkCategory::Fanart,
    ];

    /// The tag sent to the remote source for this category.
    pub fn query_tag(&self) -> &'static str {
        match self {
            ArtworkCategory::Poster => "poster",
            ArtworkCategory::Series => "series",
            ArtworkCategory::Fanart => "fanart",
        }
    }
}

impl fmt::Display for ArtworkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_tag())
    }
}

/// A single remote artwork description, annotated and ready for ranking.
///
/// Constructed fresh per aggregation call from upstream responses and
/// discarded after ranking; no cross-call cache is kept.
#[derive(Debug, Clone, Serialize)]
pub struct ArtworkCandidate {
    pub url: String,
    pub thumbnail_url: String,
    pub kind: Option<ArtworkKind>,
    /// Resolved language code; `None` when the upstream language id is
    /// missing or unknown.
    pub language: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub community_rating: Option<f64>,
    pub vote_count: Option<u32>,
    pub provider: &'static str,
}
