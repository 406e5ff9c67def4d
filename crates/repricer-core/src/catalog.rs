//! Catalog domain types and the store port the sync job is written against.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::attributes::RawAttribute;
use crate::pricing::ComputedPrice;

/// Items requested per catalog page.
pub const PAGE_SIZE: u32 = 50;

/// Store identifier of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

/// Store identifier of a sellable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub i64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A purchasable unit of an item with its own price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellableUnit {
    pub id: UnitId,
    /// Current price as reported by the store, e.g. `"30.00"`.
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub sellable_units: Vec<SellableUnit>,
}

impl Item {
    /// The only unit a price is ever written to. `None` when the item has no units.
    #[must_use]
    pub fn primary_unit(&self) -> Option<&SellableUnit> {
        self.sellable_units.first()
    }
}

/// One batch of active items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage {
    /// 1-based page index this batch was fetched with.
    pub index: u32,
    pub items: Vec<Item>,
}

impl CatalogPage {
    #[must_use]
    pub fn new(index: u32, items: Vec<Item>) -> Self {
        Self { index, items }
    }

    /// An empty page marks the end of the catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Outbound operations against the external catalog store.
///
/// Each method issues exactly one request and never retries.
pub trait CatalogStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Lists active items on the 1-based `page_index`, at most [`PAGE_SIZE`] per page.
    fn fetch_page(
        &self,
        page_index: u32,
    ) -> impl Future<Output = Result<CatalogPage, Self::Error>> + Send;

    /// Lists every custom attribute attached to `item_id`.
    fn fetch_attributes(
        &self,
        item_id: ItemId,
    ) -> impl Future<Output = Result<Vec<RawAttribute>, Self::Error>> + Send;

    /// Overwrites the price of one sellable unit.
    fn write_unit_price(
        &self,
        unit_id: UnitId,
        price: ComputedPrice,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
