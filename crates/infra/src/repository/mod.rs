//! Product repository adapters.
//!
//! Adapters implement `catalog_products::ProductRepository`; the service layer
//! never depends on a concrete one.

pub mod in_memory;

pub use in_memory::InMemoryProductRepository;
