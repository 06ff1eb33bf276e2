use serde::Deserialize;

/// One catalog row: the entry name and the locator of its full record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Default)]
pub struct CatalogEntry {
    pub name: String,
    pub url: String,
}

impl CatalogEntry {
    pub fn new(name: &str, url: &str) -> CatalogEntry {
        return CatalogEntry {
            name: name.to_string(),
            url: url.to_string(),
        };
    }
}
