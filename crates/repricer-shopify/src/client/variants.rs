//! Variant price writes for `ShopifyAdminClient`.

use reqwest::Url;

use crate::error::StoreError;
use crate::types::{VariantPriceUpdate, VariantUpdateRequest};

use super::ShopifyAdminClient;

impl ShopifyAdminClient {
    /// Overwrites the price of one variant.
    ///
    /// `price` is sent verbatim and should already be rounded to cents.
    /// The response body is not inspected beyond its status.
    ///
    /// # Errors
    ///
    /// - [`StoreError::RateLimited`] — HTTP 429.
    /// - [`StoreError::NotFound`] — the variant does not exist.
    /// - [`StoreError::UnexpectedStatus`] — any other non-2xx status, e.g. 422
    ///   when Shopify rejects the price.
    /// - [`StoreError::Http`] — network or TLS failure.
    pub async fn update_variant_price(
        &self,
        variant_id: i64,
        price: &str,
    ) -> Result<(), StoreError> {
        let url = self.variant_url(variant_id)?;
        let body = VariantUpdateRequest {
            variant: VariantPriceUpdate {
                id: variant_id,
                price: price.to_owned(),
            },
        };

        tracing::debug!(url = %url, variant_id, price, "PUT");
        let response = self
            .authorized(self.client.put(url.clone()))
            .json(&body)
            .send()
            .await?;
        self.check_status(response, &url)?;
        Ok(())
    }

    pub(super) fn variant_url(&self, variant_id: i64) -> Result<Url, StoreError> {
        self.endpoint(&format!("variants/{variant_id}.json"))
    }
}
