use anyhow::Result;

use super::CatalogEntry;
use super::EntryDetail;

#[derive(Debug)]
pub enum Event {
    CatalogLoaded(Result<Vec<CatalogEntry>>),
    DetailLoaded(CatalogEntry, Result<EntryDetail>),
    KeyboardEnter,
    KeyboardQuit,
    UITick,
    UIScrollDown,
    UIScrollUp,
    UIScrollPageDown,
    UIScrollPageUp,
    UIScrollFirst,
    UIScrollLast,
}
