//! Caller-facing request and response shapes.
//!
//! These types sit at the engine's boundary: requests carry raw caller
//! input (such as the comma-separated role list) and are parsed into the
//! typed inputs the services consume; responses materialize engine output
//! for serialization.

pub mod artwork;
pub mod people;

pub use artwork::ArtworkResponse;
pub use people::{FavoriteRequest, PeopleQuery, PeopleResponse, PersonEntry};
