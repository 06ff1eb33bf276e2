#[cfg(test)]
#[path = "tree_view_test.rs"]
mod tests;

use std::collections::HashSet;

use ratatui::widgets::ListState;

use crate::domain::models::NavigationTree;
use crate::domain::models::NodeRef;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeRow {
    pub node: NodeRef,
    pub depth: usize,
    pub label: String,
    /// `None` for leaves.
    pub expanded: Option<bool>,
}

/// Cursor and expansion state over a [`NavigationTree`]. The tree itself stays
/// untouched; collapsing a letter only hides its rows.
pub struct TreeView {
    collapsed: HashSet<usize>,
    state: ListState,
    page_height: usize,
}

impl Default for TreeView {
    fn default() -> TreeView {
        return TreeView {
            collapsed: HashSet::new(),
            state: ListState::default().with_selected(Some(0)),
            page_height: 1,
        };
    }
}

impl TreeView {
    pub fn rows(&self, tree: &NavigationTree) -> Vec<TreeRow> {
        let mut rows = vec![TreeRow {
            node: NodeRef::Root,
            depth: 0,
            label: tree.label.to_string(),
            expanded: Some(true),
        }];

        for (group_idx, group) in tree.groups.iter().enumerate() {
            let expanded = !self.collapsed.contains(&group_idx);
            rows.push(TreeRow {
                node: NodeRef::Letter(group_idx),
                depth: 1,
                label: group.letter.to_string(),
                expanded: Some(expanded),
            });

            if !expanded {
                continue;
            }

            for (leaf_idx, entry) in group.entries.iter().enumerate() {
                rows.push(TreeRow {
                    node: NodeRef::Leaf(group_idx, leaf_idx),
                    depth: 2,
                    label: entry.name.to_string(),
                    expanded: None,
                });
            }
        }

        return rows;
    }

    pub fn state_mut(&mut self) -> &mut ListState {
        return &mut self.state;
    }

    pub fn selected_index(&self) -> usize {
        return self.state.selected().unwrap_or(0);
    }

    pub fn selected(&self, tree: &NavigationTree) -> Option<NodeRef> {
        return self
            .rows(tree)
            .get(self.selected_index())
            .map(|row| return row.node);
    }

    pub fn toggle(&mut self, tree: &NavigationTree, group: usize) {
        if !self.collapsed.remove(&group) {
            self.collapsed.insert(group);
        }
        self.clamp(tree);
    }

    pub fn set_page_height(&mut self, height: usize) {
        self.page_height = height.max(1);
    }

    pub fn down(&mut self, tree: &NavigationTree) {
        self.move_by(tree, 1);
    }

    pub fn up(&mut self, tree: &NavigationTree) {
        self.move_by(tree, -1);
    }

    pub fn page_down(&mut self, tree: &NavigationTree) {
        self.move_by(tree, self.page_height as isize);
    }

    pub fn page_up(&mut self, tree: &NavigationTree) {
        self.move_by(tree, -(self.page_height as isize));
    }

    pub fn first(&mut self) {
        self.state.select(Some(0));
    }

    pub fn last(&mut self, tree: &NavigationTree) {
        let len = self.rows(tree).len();
        self.state.select(Some(len.saturating_sub(1)));
    }

    fn move_by(&mut self, tree: &NavigationTree, delta: isize) {
        let last = self.rows(tree).len().saturating_sub(1) as isize;
        let target = (self.selected_index() as isize + delta).clamp(0, last);
        self.state.select(Some(target as usize));
    }

    fn clamp(&mut self, tree: &NavigationTree) {
        self.move_by(tree, 0);
    }
}
