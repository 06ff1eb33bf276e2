use super::*;

fn entry(name: &str, id: u32) -> CatalogEntry {
    return CatalogEntry::new(
        name,
        &format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
    );
}

fn names(group: &LetterGroup) -> Vec<&str> {
    return group
        .entries
        .iter()
        .map(|e| return e.name.as_str())
        .collect();
}

#[test]
fn it_groups_by_first_letter() {
    let tree = NavigationTree::from_entries(vec![
        entry("bulbasaur", 1),
        entry("charmander", 4),
        entry("abra", 63),
    ]);

    let letters = tree
        .groups
        .iter()
        .map(|g| return g.letter.as_str())
        .collect::<Vec<&str>>();
    assert_eq!(letters, vec!["A", "B", "C"]);
    assert_eq!(names(&tree.groups[0]), vec!["abra"]);
    assert_eq!(names(&tree.groups[1]), vec!["bulbasaur"]);
    assert_eq!(names(&tree.groups[2]), vec!["charmander"]);
    assert_eq!(tree.label, "Pokémons");
}

#[test]
fn it_sorts_leaves_within_a_letter() {
    let tree = NavigationTree::from_entries(vec![
        entry("pikachu", 25),
        entry("pidgey", 16),
        entry("psyduck", 54),
        entry("paras", 46),
    ]);

    assert_eq!(tree.groups.len(), 1);
    assert_eq!(
        names(&tree.groups[0]),
        vec!["paras", "pidgey", "pikachu", "psyduck"]
    );
}

#[test]
fn it_labels_every_leaf_with_its_uppercase_initial() {
    let tree = NavigationTree::from_entries(vec![
        entry("zubat", 41),
        entry("eevee", 133),
        entry("mew", 151),
        entry("ekans", 23),
        entry("mewtwo", 150),
    ]);

    for group in &tree.groups {
        for leaf in &group.entries {
            assert!(leaf.name.to_uppercase().starts_with(&group.letter));
        }
    }
    assert_eq!(tree.len(), 5);
}

#[test]
fn it_builds_the_same_tree_for_the_same_input() {
    let input = vec![entry("onix", 95), entry("oddish", 43), entry("abra", 63)];

    let mut reversed = input.clone();
    reversed.reverse();

    assert_eq!(
        NavigationTree::from_entries(input),
        NavigationTree::from_entries(reversed)
    );
}

#[test]
fn it_skips_entries_without_a_name() {
    let tree = NavigationTree::from_entries(vec![entry("", 0), entry("abra", 63)]);

    assert_eq!(tree.len(), 1);
}

#[test]
fn it_only_attaches_entries_to_leaves() {
    let tree = NavigationTree::from_entries(vec![entry("abra", 63)]);

    assert_eq!(tree.entry(NodeRef::Root), None);
    assert_eq!(tree.entry(NodeRef::Letter(0)), None);
    assert_eq!(tree.entry(NodeRef::Leaf(0, 0)), Some(&entry("abra", 63)));
    assert_eq!(tree.entry(NodeRef::Leaf(0, 1)), None);
}

#[test]
fn it_starts_empty() {
    let tree = NavigationTree::default();

    assert!(tree.is_empty());
    assert_eq!(tree.label, "Pokémons");
}
