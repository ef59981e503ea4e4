use std::sync::Arc;

use anyhow::Context;

use catalog_infra::config::ConfigLoader;
use catalog_infra::repository::InMemoryProductRepository;
use catalog_products::ProductService;

fn main() -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = std::env::args().nth(1) {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("failed to load catalog configuration")?;

    catalog_observability::init_with(&config.logging);

    let repository = Arc::new(InMemoryProductRepository::with_products(config.seed.products));
    let service = ProductService::new(repository);

    let products = service
        .get_all_products()
        .context("failed to list catalog products")?;

    tracing::info!(count = products.len(), "catalog ready");
    for product in &products {
        tracing::info!(
            product_id = %product.id_typed(),
            name = product.name(),
            price = product.price(),
            "catalog entry"
        );
    }

    Ok(())
}
