//! Core domain entities representing the engine's data model.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`MediaItem`] / [`Credit`] - caller-owned library records and their
//!   credited people, grouped and filtered per call
//! - [`ArtworkCandidate`] - one remote artwork description after annotation
//! - [`ArtworkKind`] / [`ArtworkCategory`] - artwork classification
//!
//! All entities include unit tests demonstrating their construction and usage.

pub mod artwork;
pub mod media_item;

pub use artwork::{ArtworkCandidate, ArtworkCategory, ArtworkKind};
pub use media_item::{Credit, MediaItem};
