//! Repository boundary for catalog persistence.
//!
//! The catalog never assumes a storage engine; adapters implement
//! [`ProductRepository`] and own every persistence concern.

use std::sync::Arc;

use thiserror::Error;

use catalog_core::ProductId;

use crate::product::Product;

/// Result type returned by repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository operation error.
///
/// These are **infrastructure errors** reported by an adapter. The service
/// propagates them unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not be reached.
    #[error("repository unavailable: {0}")]
    Unavailable(String),

    /// The backing store failed while reading or writing.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Data-access collaborator for products.
pub trait ProductRepository: Send + Sync {
    /// All stored products, in the adapter's native order.
    ///
    /// An empty store yields an empty vector, never an error.
    fn find_all(&self) -> RepositoryResult<Vec<Product>>;

    /// Lookup by identifier; `None` when no product has that id.
    fn find_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;

    /// Persist a product and return the stored entity.
    fn save(&self, product: Product) -> RepositoryResult<Product>;
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn find_all(&self) -> RepositoryResult<Vec<Product>> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        (**self).find_by_id(id)
    }

    fn save(&self, product: Product) -> RepositoryResult<Product> {
        (**self).save(product)
    }
}
