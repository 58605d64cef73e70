use super::item::ItemId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("no item with id `{0}`")]
    NotFound(ItemId),
    #[error("{count} items share id `{id}`")]
    Ambiguous { id: ItemId, count: usize },
    #[error("item set is empty")]
    EmptySet,
}
