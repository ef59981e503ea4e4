//! Products catalog module.
//!
//! This crate holds the `Product` entity, the repository boundary the catalog
//! reads and writes through, and the `ProductService` façade that delegates to
//! it. Storage adapters live in `catalog-infra`.

pub mod error;
pub mod product;
pub mod repository;
pub mod service;

pub use error::{CatalogError, CatalogResult};
pub use product::Product;
pub use repository::{ProductRepository, RepositoryError, RepositoryResult};
pub use service::ProductService;
