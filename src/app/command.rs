use crate::palette::ItemId;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadCatalog,
    SaveHistory(Vec<ItemId>),
}
