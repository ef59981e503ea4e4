use std::collections::BTreeMap;
use std::sync::RwLock;

use tracing::debug;

use catalog_core::ProductId;
use catalog_products::{Product, ProductRepository, RepositoryError, RepositoryResult};

/// In-memory product repository.
///
/// Intended for tests/dev. Products are keyed by id, so `find_all` yields them
/// in ascending id order and `save` replaces any product with the same id.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<BTreeMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository pre-populated with `products`.
    ///
    /// Later entries win when ids repeat.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let map = products
            .into_iter()
            .map(|p| (p.id_typed(), p))
            .collect::<BTreeMap<_, _>>();
        Self {
            products: RwLock::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.products.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::Storage("lock poisoned".to_string())
}

impl ProductRepository for InMemoryProductRepository {
    fn find_all(&self) -> RepositoryResult<Vec<Product>> {
        let products = self.products.read().map_err(|_| poisoned())?;
        Ok(products.values().cloned().collect())
    }

    fn find_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        let products = self.products.read().map_err(|_| poisoned())?;
        Ok(products.get(&id).cloned())
    }

    fn save(&self, product: Product) -> RepositoryResult<Product> {
        let mut products = self.products.write().map_err(|_| poisoned())?;
        let id = product.id_typed();
        let replaced = products.insert(id, product.clone()).is_some();
        debug!(product_id = %id, replaced, "stored product");
        Ok(product)
    }
}
