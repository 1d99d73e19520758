use super::geom::{Pos, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    ColumnButton { columns: u8 },
    AutoplayToggle,
    Dot { index: usize },
    Card { index: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub rect: Rect,
    pub z: u32,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(rect: Rect, kind: NodeKind) -> Self {
        Self { rect, z: 0, kind }
    }

    pub fn contains(&self, p: Pos) -> bool {
        self.rect.contains(p)
    }
}

/// Clickable regions produced by the last render.
#[derive(Clone, Debug, Default)]
pub struct UiTree {
    nodes: Vec<Node>,
}

impl UiTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn push(&mut self, mut node: Node) {
        // Default z-order: insertion order.
        if node.z == 0 {
            node.z = self.nodes.len() as u32;
        }
        self.nodes.push(node);
    }

    pub fn hit_test(&self, p: Pos) -> Option<&Node> {
        self.nodes
            .iter()
            .filter(|n| n.contains(p))
            .max_by_key(|n| n.z)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/tree.rs"]
mod tests;
