use super::*;

#[test]
fn hit_test_prefers_later_nodes() {
    let mut tree = UiTree::new();
    tree.push(Node::new(Rect::new(0, 0, 20, 10), NodeKind::Card { index: 0 }));
    tree.push(Node::new(Rect::new(2, 2, 3, 1), NodeKind::Dot { index: 1 }));

    let hit = tree.hit_test(Pos::new(3, 2)).map(|n| n.kind);
    assert_eq!(hit, Some(NodeKind::Dot { index: 1 }));

    let hit = tree.hit_test(Pos::new(10, 5)).map(|n| n.kind);
    assert_eq!(hit, Some(NodeKind::Card { index: 0 }));
}

#[test]
fn hit_test_misses_outside_every_node() {
    let mut tree = UiTree::new();
    tree.push(Node::new(Rect::new(0, 0, 3, 1), NodeKind::AutoplayToggle));
    assert!(tree.hit_test(Pos::new(5, 5)).is_none());
}

#[test]
fn clear_forgets_nodes() {
    let mut tree = UiTree::new();
    tree.push(Node::new(
        Rect::new(0, 0, 3, 1),
        NodeKind::ColumnButton { columns: 2 },
    ));
    assert_eq!(tree.nodes().len(), 1);
    tree.clear();
    assert!(tree.nodes().is_empty());
}
