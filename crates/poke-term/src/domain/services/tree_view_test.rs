use super::*;
use crate::domain::models::CatalogEntry;

fn tree() -> NavigationTree {
    return NavigationTree::from_entries(vec![
        CatalogEntry::new("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/"),
        CatalogEntry::new("charmander", "https://pokeapi.co/api/v2/pokemon/4/"),
        CatalogEntry::new("abra", "https://pokeapi.co/api/v2/pokemon/63/"),
        CatalogEntry::new("arbok", "https://pokeapi.co/api/v2/pokemon/24/"),
    ]);
}

fn labels(rows: &[TreeRow]) -> Vec<&str> {
    return rows.iter().map(|row| return row.label.as_str()).collect();
}

#[test]
fn it_expands_every_letter_by_default() {
    let tree = tree();
    let view = TreeView::default();

    let rows = view.rows(&tree);

    assert_eq!(
        labels(&rows),
        vec!["Pokémons", "A", "abra", "arbok", "B", "bulbasaur", "C", "charmander"]
    );
    assert_eq!(rows[1].expanded, Some(true));
    assert_eq!(rows[2].expanded, None);
    assert_eq!(rows[2].depth, 2);
}

#[test]
fn it_hides_leaves_of_a_collapsed_letter() {
    let tree = tree();
    let mut view = TreeView::default();

    view.toggle(&tree, 0);

    assert_eq!(view.rows(&tree)[1].expanded, Some(false));
    assert_eq!(
        labels(&view.rows(&tree)),
        vec!["Pokémons", "A", "B", "bulbasaur", "C", "charmander"]
    );

    view.toggle(&tree, 0);
    assert_eq!(view.rows(&tree)[1].expanded, Some(true));
    assert_eq!(view.rows(&tree).len(), 8);
}

#[test]
fn it_starts_on_the_root() {
    let tree = tree();
    let view = TreeView::default();

    assert_eq!(view.selected(&tree), Some(NodeRef::Root));
}

#[test]
fn it_moves_within_bounds() {
    let tree = tree();
    let mut view = TreeView::default();

    view.up(&tree);
    assert_eq!(view.selected_index(), 0);

    view.down(&tree);
    view.down(&tree);
    assert_eq!(view.selected(&tree), Some(NodeRef::Leaf(0, 0)));

    view.last(&tree);
    assert_eq!(view.selected(&tree), Some(NodeRef::Leaf(2, 0)));

    view.down(&tree);
    assert_eq!(view.selected_index(), 7);

    view.first();
    assert_eq!(view.selected(&tree), Some(NodeRef::Root));
}

#[test]
fn it_pages_by_the_visible_height() {
    let tree = tree();
    let mut view = TreeView::default();
    view.set_page_height(3);

    view.page_down(&tree);
    assert_eq!(view.selected_index(), 3);

    view.page_down(&tree);
    view.page_down(&tree);
    assert_eq!(view.selected_index(), 7);

    view.page_up(&tree);
    assert_eq!(view.selected_index(), 4);
}

#[test]
fn it_keeps_the_cursor_inside_the_rows_after_collapsing() {
    let tree = tree();
    let mut view = TreeView::default();

    view.last(&tree);
    view.toggle(&tree, 2);

    assert_eq!(view.selected_index(), 6);
    assert_eq!(view.selected(&tree), Some(NodeRef::Letter(2)));
}

#[test]
fn it_only_shows_the_root_for_an_empty_tree() {
    let tree = NavigationTree::default();
    let mut view = TreeView::default();

    view.page_down(&tree);

    assert_eq!(labels(&view.rows(&tree)), vec!["Pokémons"]);
    assert_eq!(view.selected_index(), 0);
}
