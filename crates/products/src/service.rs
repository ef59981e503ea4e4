//! Catalog façade over a [`ProductRepository`].
//!
//! Every operation is a single call-through: one repository call per
//! invocation, arguments passed unmodified, results returned unchanged.
//! Failures are propagated as-is without retries or local recovery.

use tracing::{debug, warn};

use catalog_core::{DomainError, ProductId};

use crate::error::CatalogResult;
use crate::product::Product;
use crate::repository::{ProductRepository, RepositoryError, RepositoryResult};

/// Stateless product service.
///
/// The repository is injected at construction; pass an `Arc<R>` to share one
/// backend between several services.
#[derive(Debug, Clone)]
pub struct ProductService<R> {
    repository: R,
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn into_repository(self) -> R {
        self.repository
    }

    /// List every product exactly as the repository returns it.
    pub fn get_all_products(&self) -> RepositoryResult<Vec<Product>> {
        let products = self
            .repository
            .find_all()
            .inspect_err(|e| log_failure("get_all_products", e))?;
        debug!(operation = "get_all_products", count = products.len(), "listed products");
        Ok(products)
    }

    /// Hand `product` to the repository for persistence.
    pub fn add_product(&self, product: Product) -> RepositoryResult<Product> {
        let id = product.id_typed();
        let saved = self
            .repository
            .save(product)
            .inspect_err(|e| log_failure("add_product", e))?;
        debug!(operation = "add_product", product_id = %id, "saved product");
        Ok(saved)
    }

    /// Lookup by id. Absence is reported as `None`, not as an error.
    pub fn get_product(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        let found = self
            .repository
            .find_by_id(id)
            .inspect_err(|e| log_failure("get_product", e))?;
        debug!(operation = "get_product", product_id = %id, found = found.is_some(), "looked up product");
        Ok(found)
    }

    /// Lookup by id, treating absence as [`DomainError::NotFound`].
    pub fn require_product(&self, id: ProductId) -> CatalogResult<Product> {
        let product = self.get_product(id)?.ok_or_else(DomainError::not_found)?;
        Ok(product)
    }
}

fn log_failure(operation: &'static str, error: &RepositoryError) {
    warn!(operation, error = %error, "repository call failed");
}
