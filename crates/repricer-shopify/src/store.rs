//! [`CatalogStore`] implementation backed by the Shopify Admin API.

use repricer_core::{
    CatalogPage, CatalogStore, ComputedPrice, Item, ItemId, RawAttribute, UnitId,
};

use crate::client::ShopifyAdminClient;
use crate::error::StoreError;

impl CatalogStore for ShopifyAdminClient {
    type Error = StoreError;

    async fn fetch_page(&self, page_index: u32) -> Result<CatalogPage, StoreError> {
        let products = self.fetch_products_page(page_index).await?;
        Ok(CatalogPage::new(
            page_index,
            products.into_iter().map(Item::from).collect(),
        ))
    }

    async fn fetch_attributes(&self, item_id: ItemId) -> Result<Vec<RawAttribute>, StoreError> {
        let metafields = self.fetch_metafields(item_id.0).await?;
        Ok(metafields.into_iter().map(RawAttribute::from).collect())
    }

    async fn write_unit_price(
        &self,
        unit_id: UnitId,
        price: ComputedPrice,
    ) -> Result<(), StoreError> {
        self.update_variant_price(unit_id.0, &price.to_string()).await
    }
}
