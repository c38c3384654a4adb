//! # Metadata Aggregator
//!
//! A metadata aggregation and ranking engine for media libraries.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, collaborator traits, and the
//!   grouping/ranking core
//! - **Application Layer** ([`application`]) - Service orchestration over the
//!   injected collaborators
//! - **DTO Layer** ([`dto`]) - Caller-facing request and response shapes
//!
//! ## Features
//!
//! - Name-indexed grouping of library items with deferred, thread-safe
//!   per-group filters
//! - Multi-category remote artwork aggregation with per-category failure
//!   isolation and cooperative cancellation
//! - Deterministic preference ranking by language, rating, and vote count
//!
//! The engine is request-scoped and keeps no state of its own: library
//! access, the remote artwork transport, and favorite persistence are
//! collaborator traits implemented by the embedding application.
//!
//! ## Quick Start
//!
//! ```ignore
//! let config = metadata_aggregator::config::load_from_env()?;
//! metadata_aggregator::config::init_tracing(&config)?;
//!
//! let artwork = ArtworkService::new(provider, config.artwork_base_url.clone());
//! let people = PeopleService::new(library, favorites);
//!
//! let ranked = artwork
//!     .artwork_for(&item, &config.preferred_language, &cancel)
//!     .await;
//! ```
//!
//! ## Configuration
//!
//! Engine configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod dto;
pub mod error;
pub mod utils;

pub mod config;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ArtworkService, PeopleService};
    pub use crate::domain::entities::{
        ArtworkCandidate, ArtworkCategory, ArtworkKind, Credit, MediaItem,
    };
    pub use crate::domain::grouping::{PeopleIndex, RoleFilter};
    pub use crate::domain::providers::{ArtworkProvider, FavoriteStore, MediaLibrary};
    pub use crate::error::AppError;
}
