pub mod app_config;
pub mod attributes;
pub mod catalog;
pub mod config;
pub mod pricing;
pub mod rates;

pub use app_config::{AppConfig, Environment, StoreConfig};
pub use attributes::{ItemAttributes, RawAttribute};
pub use catalog::{CatalogPage, CatalogStore, Item, ItemId, SellableUnit, UnitId, PAGE_SIZE};
pub use config::{load_app_config, load_app_config_from_env};
pub use pricing::{compute_price, ComputedPrice};
pub use rates::RateParameters;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
