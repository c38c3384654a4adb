//! Media item entity and its credited people.

use std::collections::HashMap;

/// A single person credited on a media item.
///
/// The `role` is optional; the same name may appear on one item several
/// times under different roles (e.g. an actor who also directed).
#[derive(Debug, Clone)]
pub struct Credit {
    pub name: String,
    pub role: Option<String>,
}

impl Credit {
    /// Creates a new credit.
    pub fn new(name: impl Into<String>, role: Option<&str>) -> Self {
        Self {
            name: name.into(),
            role: role.map(|r| r.to_string()),
        }
    }
}

/// A library item as supplied by the media library collaborator.
///
/// Items are read-only from the engine's perspective: they are grouped and
/// filtered per call and never mutated or persisted here. External ids used
/// to address remote metadata sources live in `provider_ids`, keyed by the
/// provider's id key.
#[derive(Debug, Clone)]
pub struct MediaItem {
    pub id: String,
    pub name: String,
    pub credits: Vec<Credit>,
    pub provider_ids: HashMap<String, String>,
}

impl MediaItem {
    /// Creates an item with no credits or provider ids.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            credits: Vec::new(),
            provider_ids: HashMap::new(),
        }
    }

    /// Adds a credit (builder style).
    pub fn with_credit(mut self, name: impl Into<String>, role: Option<&str>) -> Self {
        self.credits.push(Credit::new(name, role));
        self
    }

    /// Adds an external provider id (builder style).
    pub fn with_provider_id(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.provider_ids.insert(key.into(), value.into());
        self
    }

    /// Returns true if the item carries at least one credit.
    pub fn has_credits(&self) -> bool {
        !self.credits.is_empty()
    }

    /// Looks up an external id by provider key.
    pub fn provider_id(&self, key: &str) -> Option<&str> {
        self.provider_ids.get(key).map(String::as_str)
    }
}
