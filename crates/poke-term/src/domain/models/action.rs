use super::CatalogEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LoadCatalog,
    LoadDetail(CatalogEntry),
}
