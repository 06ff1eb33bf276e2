//! Terminal browser for the PokeAPI creature catalog.
//!
//! The catalog is fetched once at startup and grouped alphabetically in a tree;
//! selecting an entry fetches its full record and renders it in a detail panel.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Action, CatalogClient, CatalogEntry, EntryDetail, Event};
pub use domain::services::{ActionsService, AppState};
pub use infrastructure::clients::PokeApi;
