//! Source syntax tree produced by the parser.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. Children are
//! owned through their parent's id list; the `parent` field is a plain id
//! back-reference, so the tree never holds two owners for one node.

use std::fmt;

use id_arena::{Arena, Id};

pub type NodeId = Id<Node>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Program { body: Vec<NodeId> },
    CallExpression { name: String, params: Vec<NodeId> },
    NumberLiteral { value: i64 },
}

impl NodeKind {
    /// Child ids in stored order. Literals have none.
    pub fn children(&self) -> &[NodeId] {
        match self {
            NodeKind::Program { body } => body,
            NodeKind::CallExpression { params, .. } => params,
            NodeKind::NumberLiteral { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
}

pub struct SourceTree {
    nodes: Arena<Node>,
    root: NodeId,
}

impl SourceTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Total number of nodes, the `Program` root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.get(self.root)
            .is_none_or(|node| node.kind.children().is_empty())
    }
}

impl fmt::Debug for SourceTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceTree")
            .field("root", &self.root)
            .field("len", &self.nodes.len())
            .finish()
    }
}

/// Builds a [`SourceTree`] bottom-up: children are allocated first and get
/// their parent link when the enclosing node is created.
pub struct TreeBuilder {
    nodes: Arena<Node>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
        }
    }

    pub fn number(&mut self, value: i64) -> NodeId {
        self.nodes.alloc(Node {
            kind: NodeKind::NumberLiteral { value },
            parent: None,
        })
    }

    pub fn call(&mut self, name: impl Into<String>, params: Vec<NodeId>) -> NodeId {
        self.adopt(NodeKind::CallExpression {
            name: name.into(),
            params,
        })
    }

    pub fn program(mut self, body: Vec<NodeId>) -> SourceTree {
        let root = self.adopt(NodeKind::Program { body });
        SourceTree {
            nodes: self.nodes,
            root,
        }
    }

    fn adopt(&mut self, kind: NodeKind) -> NodeId {
        let children = kind.children().to_vec();
        let id = self.nodes.alloc(Node { kind, parent: None });
        for child in children {
            if let Some(node) = self.nodes.get_mut(child) {
                node.parent = Some(id);
            }
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_links_children_to_parents() {
        let mut builder = TreeBuilder::new();
        let two = builder.number(2);
        let four = builder.number(4);
        let call = builder.call("add", vec![two, four]);
        let tree = builder.program(vec![call]);

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.get(tree.root()).and_then(|n| n.parent), None);
        assert_eq!(tree.get(call).and_then(|n| n.parent), Some(tree.root()));
        assert_eq!(tree.get(two).and_then(|n| n.parent), Some(call));
        assert_eq!(tree.get(four).and_then(|n| n.parent), Some(call));
        assert!(!tree.is_empty());
    }

    #[test]
    fn empty_program_has_only_a_root() {
        let tree = TreeBuilder::new().program(Vec::new());
        assert_eq!(tree.len(), 1);
        assert!(tree.is_empty());
    }

    #[test]
    fn ids_from_another_arena_do_not_resolve() {
        let foreign = TreeBuilder::new().number(1);
        let tree = TreeBuilder::new().program(vec![foreign]);
        assert!(tree.get(foreign).is_none());
    }
}
