use repricer_core::{CatalogStore, ComputedPrice, SellableUnit};

/// Writes `price` to `unit`, which must be the item's primary sellable unit.
///
/// Items without a unit never reach this function.
pub async fn update_price<S>(
    store: &S,
    unit: &SellableUnit,
    price: ComputedPrice,
) -> Result<(), S::Error>
where
    S: CatalogStore + Sync,
{
    store.write_unit_price(unit.id, price).await
}
