use repricer_core::{CatalogPage, CatalogStore};

/// Fetches one page of active items.
///
/// `page_index` is 1-based. Errors are returned untouched; the caller treats
/// them as fatal to the job.
pub async fn next_page<S>(store: &S, page_index: u32) -> Result<CatalogPage, S::Error>
where
    S: CatalogStore + Sync,
{
    debug_assert!(page_index >= 1, "catalog pages are 1-based");
    let page = store.fetch_page(page_index).await?;
    tracing::debug!(page = page_index, items = page.items.len(), "fetched catalog page");
    Ok(page)
}
