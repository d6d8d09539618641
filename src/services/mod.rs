//! Services Layer
//!
//! Pure business logic on top of the repositories. The presentation layer
//! calls these operations directly.

pub mod catalog_service;

pub use catalog_service::CatalogService;
