//! Per-product metafield lookup for `ShopifyAdminClient`.

use reqwest::Url;

use crate::error::StoreError;
use crate::types::{Metafield, MetafieldsResponse};

use super::ShopifyAdminClient;

impl ShopifyAdminClient {
    /// Fetches every metafield attached to `product_id`.
    ///
    /// # Errors
    ///
    /// Same status and transport mapping as
    /// [`ShopifyAdminClient::fetch_products_page`]; a body without a
    /// `metafields` array is a [`StoreError::Deserialize`].
    pub async fn fetch_metafields(&self, product_id: i64) -> Result<Vec<Metafield>, StoreError> {
        let url = self.metafields_url(product_id)?;
        let parsed: MetafieldsResponse = self
            .get_json(url, &format!("metafields of product {product_id}"))
            .await?;
        Ok(parsed.metafields)
    }

    pub(super) fn metafields_url(&self, product_id: i64) -> Result<Url, StoreError> {
        self.endpoint(&format!("products/{product_id}/metafields.json"))
    }
}
