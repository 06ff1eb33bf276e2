use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::CatalogEntry;
use crate::domain::models::EntryDetail;

#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetches the whole catalog in a single page.
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>>;
    /// Fetches the full record behind `url`, used verbatim.
    async fn fetch_detail(&self, url: &str) -> Result<EntryDetail>;
}

pub type CatalogClientBox = Box<dyn CatalogClient>;
