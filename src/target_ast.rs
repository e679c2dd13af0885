//! C-side syntax tree built by the transformer.
//!
//! Unlike the source tree, the C tree separates statements from expressions:
//! a call at the top of the program sits inside an `ExpressionStatement`,
//! while a call used as an argument does not.

use std::fmt;

use id_arena::{Arena, Id};

use crate::error::InternalError;

pub type TargetId = Id<TargetNode>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetNode {
    Program { body: Vec<TargetId> },
    ExpressionStatement { expression: TargetId },
    CallExpression { callee: TargetId, params: Vec<TargetId> },
    Identifier { name: String },
    NumberLiteral { value: i64 },
}

impl TargetNode {
    /// Child ids in render order (callee before arguments).
    pub fn children(&self) -> Vec<TargetId> {
        match self {
            TargetNode::Program { body } => body.clone(),
            TargetNode::ExpressionStatement { expression } => vec![*expression],
            TargetNode::CallExpression { callee, params } => {
                let mut children = Vec::with_capacity(params.len() + 1);
                children.push(*callee);
                children.extend_from_slice(params);
                children
            }
            TargetNode::Identifier { .. } | TargetNode::NumberLiteral { .. } => Vec::new(),
        }
    }
}

pub struct TargetTree {
    nodes: Arena<TargetNode>,
    root: TargetId,
}

impl TargetTree {
    pub fn root(&self) -> TargetId {
        self.root
    }

    pub fn get(&self, id: TargetId) -> Option<&TargetNode> {
        self.nodes.get(id)
    }

    pub fn node(&self, id: TargetId) -> Result<&TargetNode, InternalError> {
        self.get(id).ok_or(InternalError::UnknownTargetNode { index: id.index() })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TargetId, &TargetNode)> {
        self.nodes.iter()
    }

    /// True when the program has no statements.
    pub fn is_empty(&self) -> bool {
        self.get(self.root)
            .is_none_or(|node| node.children().is_empty())
    }
}

impl fmt::Debug for TargetTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetTree")
            .field("root", &self.root)
            .field("len", &self.nodes.len())
            .finish()
    }
}

/// Allocates C nodes one at a time and attaches each to its parent's child
/// list as soon as it exists.
pub struct TargetBuilder {
    nodes: Arena<TargetNode>,
}

impl Default for TargetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
        }
    }

    pub fn program(&mut self) -> TargetId {
        self.nodes.alloc(TargetNode::Program { body: Vec::new() })
    }

    /// Creates a call with an `Identifier` callee and no arguments yet.
    pub fn call_expression(&mut self, name: impl Into<String>) -> TargetId {
        let callee = self.nodes.alloc(TargetNode::Identifier { name: name.into() });
        self.nodes.alloc(TargetNode::CallExpression {
            callee,
            params: Vec::new(),
        })
    }

    pub fn expression_statement(&mut self, expression: TargetId) -> TargetId {
        self.nodes
            .alloc(TargetNode::ExpressionStatement { expression })
    }

    pub fn number(&mut self, value: i64) -> TargetId {
        self.nodes.alloc(TargetNode::NumberLiteral { value })
    }

    /// Appends `child` to the sequence owned by `target`: a program body or
    /// a call's argument list.
    pub fn append(&mut self, target: TargetId, child: TargetId) -> Result<(), InternalError> {
        match self.nodes.get_mut(target) {
            Some(TargetNode::Program { body }) => body.push(child),
            Some(TargetNode::CallExpression { params, .. }) => params.push(child),
            Some(_) => {
                return Err(InternalError::InvalidInsertionTarget {
                    index: target.index(),
                });
            }
            None => {
                return Err(InternalError::UnknownTargetNode {
                    index: target.index(),
                });
            }
        }
        Ok(())
    }

    pub fn finish(self, root: TargetId) -> Result<TargetTree, InternalError> {
        match self.nodes.get(root) {
            Some(TargetNode::Program { .. }) => Ok(TargetTree {
                nodes: self.nodes,
                root,
            }),
            Some(_) => Err(InternalError::RootNotProgram),
            None => Err(InternalError::UnknownTargetNode {
                index: root.index(),
            }),
        }
    }
}
