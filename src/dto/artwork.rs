//! Caller-facing response shape for artwork aggregation.

use crate::domain::entities::ArtworkCandidate;
use serde::Serialize;

/// Ranked artwork listing response.
#[derive(Debug, Serialize)]
pub struct ArtworkResponse {
    pub items: Vec<ArtworkCandidate>,
    pub total: usize,
}

impl From<Vec<ArtworkCandidate>> for ArtworkResponse {
    fn from(items: Vec<ArtworkCandidate>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}
