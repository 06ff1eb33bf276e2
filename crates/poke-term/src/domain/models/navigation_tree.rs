#[cfg(test)]
#[path = "navigation_tree_test.rs"]
mod tests;

use std::collections::BTreeMap;

use super::CatalogEntry;

pub const ROOT_LABEL: &str = "Pokémons";

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LetterGroup {
    pub letter: String,
    pub entries: Vec<CatalogEntry>,
}

/// Address of a node in a [`NavigationTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRef {
    Root,
    Letter(usize),
    Leaf(usize, usize),
}

/// Catalog grouped by uppercase first letter. Letters and the entries beneath
/// each letter are sorted ascending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationTree {
    pub label: String,
    pub groups: Vec<LetterGroup>,
}

impl Default for NavigationTree {
    fn default() -> NavigationTree {
        return NavigationTree {
            label: ROOT_LABEL.to_string(),
            groups: vec![],
        };
    }
}

impl NavigationTree {
    pub fn from_entries(entries: Vec<CatalogEntry>) -> NavigationTree {
        let mut grouped: BTreeMap<String, Vec<CatalogEntry>> = BTreeMap::new();
        for entry in entries {
            let letter = match entry.name.chars().next() {
                Some(first) => first.to_uppercase().to_string(),
                None => {
                    tracing::warn!(url = %entry.url, "skipping catalog entry without a name");
                    continue;
                }
            };
            grouped.entry(letter).or_default().push(entry);
        }

        let groups = grouped
            .into_iter()
            .map(|(letter, mut entries)| {
                entries.sort_by(|a, b| return a.name.cmp(&b.name));
                return LetterGroup { letter, entries };
            })
            .collect::<Vec<LetterGroup>>();

        return NavigationTree {
            groups,
            ..Default::default()
        };
    }

    pub fn is_empty(&self) -> bool {
        return self.groups.is_empty();
    }

    pub fn len(&self) -> usize {
        return self.groups.iter().map(|group| return group.entries.len()).sum();
    }

    /// Payload attached to a node. Only leaves carry one.
    pub fn entry(&self, node: NodeRef) -> Option<&CatalogEntry> {
        if let NodeRef::Leaf(group, leaf) = node {
            return self.groups.get(group)?.entries.get(leaf);
        }

        return None;
    }
}
