use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::TreeView;
use crate::domain::models::Action;
use crate::domain::models::CatalogEntry;
use crate::domain::models::EntryDetail;
use crate::domain::models::Event;
use crate::domain::models::NavigationTree;
use crate::domain::models::NodeRef;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

pub const INTRO_TEXT: &str = "Select a Pokémon from the list";

/// State owned by the UI loop: the navigation tree and the detail panel text.
/// Fetch results only reach it through [`AppState::handle_event`].
pub struct AppState {
    pub details: String,
    pub last_known_height: usize,
    pub tree: NavigationTree,
    pub tree_view: TreeView,
}

impl Default for AppState {
    fn default() -> AppState {
        return AppState {
            details: INTRO_TEXT.to_string(),
            last_known_height: 0,
            tree: NavigationTree::default(),
            tree_view: TreeView::default(),
        };
    }
}

impl AppState {
    /// Applies one event. Returns `true` when the application should exit.
    pub fn handle_event(
        &mut self,
        event: Event,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        match event {
            Event::KeyboardQuit => {
                return Ok(true);
            }
            Event::KeyboardEnter => {
                if let Some(entry) = self.select_current() {
                    tx.send(Action::LoadDetail(entry))?;
                }
            }
            Event::CatalogLoaded(res) => {
                self.handle_catalog(res);
            }
            Event::DetailLoaded(entry, res) => {
                self.handle_detail(&entry, res);
            }
            Event::UIScrollDown => {
                self.tree_view.down(&self.tree);
            }
            Event::UIScrollUp => {
                self.tree_view.up(&self.tree);
            }
            Event::UIScrollPageDown => {
                self.tree_view.page_down(&self.tree);
            }
            Event::UIScrollPageUp => {
                self.tree_view.page_up(&self.tree);
            }
            Event::UIScrollFirst => {
                self.tree_view.first();
            }
            Event::UIScrollLast => {
                self.tree_view.last(&self.tree);
            }
            Event::UITick => {}
        }

        return Ok(false);
    }

    pub fn handle_catalog(&mut self, res: Result<Vec<CatalogEntry>>) {
        match res {
            Ok(entries) => {
                self.tree = NavigationTree::from_entries(entries);
                self.tree_view = TreeView::default();
                self.tree_view.set_page_height(self.last_known_height);
                tracing::info!(
                    entries = self.tree.len(),
                    letters = self.tree.groups.len(),
                    "catalog loaded"
                );
            }
            Err(err) => {
                tracing::error!(error = ?err, "catalog fetch failed");
                self.details = format!("Failed to load Pokémon list: {err:#}");
            }
        }
    }

    pub fn handle_detail(&mut self, entry: &CatalogEntry, res: Result<EntryDetail>) {
        match res {
            Ok(detail) => {
                self.details = detail.report();
            }
            Err(err) => {
                tracing::error!(name = %entry.name, error = ?err, "detail fetch failed");
                self.details = format!("Failed to load details for {}: {err:#}", entry.name);
            }
        }
    }

    /// Selects the node under the cursor. Letter nodes toggle their expansion and
    /// yield nothing; a leaf yields its entry and shows a loading notice.
    pub fn select_current(&mut self) -> Option<CatalogEntry> {
        match self.tree_view.selected(&self.tree)? {
            NodeRef::Root => return None,
            NodeRef::Letter(group) => {
                self.tree_view.toggle(&self.tree, group);
                return None;
            }
            node => {
                let entry = self.tree.entry(node)?.clone();
                self.details = format!("Loading {}...", entry.name);
                return Some(entry);
            }
        }
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_height = rect.height.into();
        self.tree_view.set_page_height(self.last_known_height);
    }
}
