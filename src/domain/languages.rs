//! Numeric language id resolution.

use crate::domain::providers::LanguageEntry;
use std::collections::HashMap;

/// Maps the remote source's numeric language ids to language codes.
///
/// Built once per aggregation call from the provider's language table.
/// Resolution is best-effort: unknown ids resolve to `None` and the
/// candidate simply carries no language.
#[derive(Debug, Default)]
pub struct LanguageMap {
    by_id: HashMap<i64, String>,
}

impl LanguageMap {
    /// Builds the map from the provider's language table.
    ///
    /// On duplicate ids the first entry wins.
    pub fn new(entries: Vec<LanguageEntry>) -> Self {
        let mut by_id = HashMap::with_capacity(entries.len());
        for entry in entries {
            by_id.entry(entry.id).or_insert(entry.abbreviation);
        }
        Self { by_id }
    }

    /// An empty map; every lookup resolves to `None`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolves a numeric language id to its code.
    pub fn resolve(&self, id: i64) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }
}
