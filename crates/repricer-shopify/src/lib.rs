pub mod client;
pub mod error;
mod store;
pub mod types;

pub use client::ShopifyAdminClient;
pub use error::StoreError;
pub use types::{Metafield, Product, ProductsResponse, Variant};
