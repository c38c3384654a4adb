//! Collaborator trait definitions for the domain layer.
//!
//! These traits abstract the external systems the engine aggregates over.
//! Concrete implementations belong to the embedding application; the engine
//! only depends on the contracts.
//!
//! # Architecture
//!
//! - Traits define the contract for each collaborator
//! - Instances are injected into services as `Arc<impl Trait>`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Providers
//!
//! - [`MediaLibrary`] - item records and person lookup
//! - [`ArtworkProvider`] - remote artwork source and its language table
//! - [`FavoriteStore`] - per-user favorite flag persistence
//!
//! # Testing
//!
//! See the in-memory fakes in `tests/common/mod.rs` for usage examples.

pub mod artwork_provider;
pub mod favorite_store;
pub mod media_library;

pub use artwork_provider::{ArtworkProvider, LanguageEntry, RatingsInfo, RemoteArtwork};
pub use favorite_store::FavoriteStore;
pub use media_library::MediaLibrary;

#[cfg(test)]
pub use artwork_provider::MockArtworkProvider;
#[cfg(test)]
pub use favorite_store::MockFavoriteStore;
#[cfg(test)]
pub use media_library::MockMediaLibrary;
