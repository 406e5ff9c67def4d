//! Active-product listing for `ShopifyAdminClient`.

use reqwest::Url;

use repricer_core::PAGE_SIZE;

use crate::error::StoreError;
use crate::types::{Product, ProductsResponse};

use super::ShopifyAdminClient;

impl ShopifyAdminClient {
    /// Fetches one page of active products using page-number pagination.
    ///
    /// A `products` array that is present but empty means the catalog is
    /// exhausted. A 2xx body without a `products` field is treated as a
    /// malformed response rather than as the end of the catalog.
    ///
    /// # Errors
    ///
    /// - [`StoreError::RateLimited`] — HTTP 429.
    /// - [`StoreError::NotFound`] — HTTP 404.
    /// - [`StoreError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`StoreError::Http`] — network or TLS failure.
    /// - [`StoreError::Deserialize`] — body is not valid JSON of the expected shape.
    /// - [`StoreError::MalformedResponse`] — body has no `products` field.
    pub async fn fetch_products_page(&self, page: u32) -> Result<Vec<Product>, StoreError> {
        let url = self.products_url(page)?;
        let context = format!("products page {page} from {}", self.store);
        let parsed: ProductsResponse = self.get_json(url, &context).await?;

        parsed.products.ok_or_else(|| StoreError::MalformedResponse {
            context,
            reason: "response has no `products` field".to_owned(),
        })
    }

    /// Builds `products.json?limit=50&page={page}&status=active`.
    pub(super) fn products_url(&self, page: u32) -> Result<Url, StoreError> {
        let mut url = self.endpoint("products.json")?;
        url.query_pairs_mut()
            .append_pair("limit", &PAGE_SIZE.to_string())
            .append_pair("page", &page.to_string())
            .append_pair("status", "active");
        Ok(url)
    }
}
