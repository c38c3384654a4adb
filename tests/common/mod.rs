#![allow(dead_code)]

use async_trait::async_trait;
use metadata_aggregator::domain::entities::{ArtworkCategory, MediaItem};
use metadata_aggregator::domain::providers::{
    ArtworkProvider, FavoriteStore, LanguageEntry, MediaLibrary, RatingsInfo, RemoteArtwork,
};
use metadata_aggregator::error::AppError;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;

pub const BASE_URL: &str = "https://artwork.test/banners/";

pub fn remote_artwork(
    key_type: &str,
    file_name: &str,
    language_id: Option<i64>,
    rating: Option<f64>,
    votes: Option<u32>,
    resolution: Option<&str>,
) -> RemoteArtwork {
    RemoteArtwork {
        key_type: key_type.to_string(),
        file_name: file_name.to_string(),
        thumbnail: format!("_cache/{file_name}"),
        resolution: resolution.map(str::to_string),
        language_id,
        ratings_info: RatingsInfo {
            average: rating,
            count: votes,
        },
    }
}

pub fn series_item(tvdb_id: &str) -> MediaItem {
    MediaItem::new("s1", "Some Show").with_provider_id("tvdb", tvdb_id)
}

/// In-memory media library backed by fixed item and person lists.
pub struct InMemoryLibrary {
    items: Vec<MediaItem>,
    people: Vec<MediaItem>,
}

impl InMemoryLibrary {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            items,
            people: Vec::new(),
        }
    }

    pub fn with_person(mut self, person: MediaItem) -> Self {
        self.people.push(person);
        self
    }
}

#[async_trait]
impl MediaLibrary for InMemoryLibrary {
    async fn items_under<'a>(&self, _parent_id: Option<&'a str>) -> Result<Vec<MediaItem>, AppError> {
        Ok(self.items.clone())
    }

    async fn find_person(&self, name: &str) -> Result<Option<MediaItem>, AppError> {
        Ok(self
            .people
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .cloned())
    }
}

/// Favorite store recording every update it receives.
#[derive(Default)]
pub struct RecordingFavoriteStore {
    pub updates: Mutex<Vec<(String, String, bool)>>,
}

#[async_trait]
impl FavoriteStore for RecordingFavoriteStore {
    async fn set_favorite(
        &self,
        user_id: &str,
        item_name: &str,
        is_favorite: bool,
    ) -> Result<(), AppError> {
        self.updates
            .lock()
            .expect("favorite store lock poisoned")
            .push((user_id.to_string(), item_name.to_string(), is_favorite));
        Ok(())
    }
}

/// Per-category behavior of the scripted artwork provider.
pub enum CategoryScript {
    Respond(Vec<RemoteArtwork>),
    Fail,
    /// Never completes; used to exercise cancellation.
    Hang,
}

/// Scripted artwork provider with independent per-category behavior.
///
/// Categories without a script respond with an empty list.
pub struct ScriptedProvider {
    scripts: HashMap<&'static str, CategoryScript>,
    languages_available: bool,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            languages_available: true,
        }
    }

    pub fn with_script(mut self, category: ArtworkCategory, script: CategoryScript) -> Self {
        self.scripts.insert(category.query_tag(), script);
        self
    }

    pub fn without_languages(mut self) -> Self {
        self.languages_available = false;
        self
    }
}

#[async_trait]
impl ArtworkProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "TheTVDB"
    }

    fn provider_id_key(&self) -> &'static str {
        "tvdb"
    }

    async fn artwork(
        &self,
        _series_id: u32,
        category: ArtworkCategory,
        _preferred_language: &str,
    ) -> Result<Vec<RemoteArtwork>, AppError> {
        match self.scripts.get(category.query_tag()) {
            Some(CategoryScript::Respond(records)) => Ok(records.clone()),
            Some(CategoryScript::Fail) => Err(AppError::upstream(
                "scripted category failure",
                json!({ "category": category.query_tag() }),
            )),
            Some(CategoryScript::Hang) => std::future::pending().await,
            None => Ok(Vec::new()),
        }
    }

    async fn languages(&self) -> Result<Vec<LanguageEntry>, AppError> {
        if !self.languages_available {
            return Err(AppError::upstream("language table unavailable", json!({})));
        }
        Ok(vec![
            LanguageEntry {
                id: 7,
                abbreviation: "en".to_string(),
            },
            LanguageEntry {
                id: 14,
                abbreviation: "de".to_string(),
            },
        ])
    }
}
