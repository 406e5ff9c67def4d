use repricer_core::ItemId;
use thiserror::Error;

/// Where in the per-item pipeline a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStage {
    Resolving,
    Updating,
}

impl std::fmt::Display for ItemStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemStage::Resolving => write!(f, "resolving"),
            ItemStage::Updating => write!(f, "updating"),
        }
    }
}

/// A recoverable failure confined to one item.
#[derive(Debug, Error)]
#[error("{stage} failed for item {item_id}: {source}")]
pub struct ItemError {
    pub item_id: ItemId,
    pub stage: ItemStage,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl ItemError {
    pub fn new<E>(item_id: ItemId, stage: ItemStage, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            item_id,
            stage,
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("store said no")]
    struct Refused;

    #[test]
    fn item_error_names_stage_and_item() {
        let err = ItemError::new(ItemId(42), ItemStage::Updating, Refused);
        assert_eq!(err.to_string(), "updating failed for item 42: store said no");
        assert_eq!(
            ItemError::new(ItemId(7), ItemStage::Resolving, Refused).stage,
            ItemStage::Resolving
        );
    }
}
