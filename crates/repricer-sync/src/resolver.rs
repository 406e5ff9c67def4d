use repricer_core::{CatalogStore, ItemAttributes, ItemId};

/// Fetches the custom attributes of one item and reduces them to calculator inputs.
///
/// Absent or unparsable values become zero; only a store error is returned as `Err`.
pub async fn resolve_attributes<S>(
    store: &S,
    item_id: ItemId,
) -> Result<ItemAttributes, S::Error>
where
    S: CatalogStore + Sync,
{
    let raw = store.fetch_attributes(item_id).await?;
    Ok(ItemAttributes::from_raw(&raw))
}
