//! Business logic services for the application layer.

pub mod artwork_service;
pub mod people_service;

pub use artwork_service::ArtworkService;
pub use people_service::PeopleService;
