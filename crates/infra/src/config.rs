//! Configuration loading and representation.
//!
//! Sources are merged in this order (later sources override earlier):
//! 1. `CatalogConfig::default()`
//! 2. a TOML file, when a path is given
//! 3. environment variables prefixed `CATALOG_`, nested keys split on `__`
//!    (e.g. `CATALOG_LOGGING__FILTER=debug`)

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use catalog_observability::TracingConfig;
use catalog_products::Product;

pub const ENV_PREFIX: &str = "CATALOG_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("config file not found: {0}")]
    MissingFile(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl From<figment::Error> for ConfigError {
    fn from(value: figment::Error) -> Self {
        Self::Load(Box::new(value))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub logging: TracingConfig,
    pub seed: SeedConfig,
}

/// Products loaded into the in-memory repository at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Assemble every configured source without extracting it.
    pub fn figment(&self) -> Result<Figment, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(CatalogConfig::default()));

        if let Some(path) = &self.config_path {
            // An explicitly requested file must exist.
            if !path.exists() {
                return Err(ConfigError::MissingFile(path.clone()));
            }
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    pub fn load(&self) -> Result<CatalogConfig, ConfigError> {
        let config = extract(self.figment()?)?;
        debug!(
            path = ?self.config_path,
            seed_products = config.seed.products.len(),
            "configuration loaded"
        );
        Ok(config)
    }
}

/// Extract and validate a `CatalogConfig` from any figment.
pub fn extract(figment: Figment) -> Result<CatalogConfig, ConfigError> {
    let config: CatalogConfig = figment.extract()?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &CatalogConfig) -> Result<(), ConfigError> {
    if config.logging.filter.trim().is_empty() {
        return Err(ConfigError::Invalid("logging.filter cannot be empty".to_string()));
    }

    let mut seen = HashSet::new();
    for product in &config.seed.products {
        let id = product.id_typed();
        if !seen.insert(id) {
            return Err(ConfigError::Invalid(format!(
                "duplicate seed product id {id}"
            )));
        }
    }

    Ok(())
}
