//! Depth-first, pre-order walk over a [`SourceTree`].
//!
//! Consumers implement [`Visitor`] and override the hooks they care about.
//! Every hook runs before the node's children are visited, so a parent has
//! always been seen by the time any of its children are.

use crate::ast::{Node, NodeId, NodeKind, SourceTree};
use crate::error::InternalError;

/// A node as seen during traversal.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'t> {
    pub id: NodeId,
    pub node: &'t Node,
    pub depth: usize,
}

pub trait Visitor {
    fn visit_program(&mut self, _program: Visit<'_>) -> Result<(), InternalError> {
        Ok(())
    }

    fn visit_call_expression(
        &mut self,
        _call: Visit<'_>,
        _name: &str,
        _parent: Visit<'_>,
    ) -> Result<(), InternalError> {
        Ok(())
    }

    fn visit_number_literal(
        &mut self,
        _literal: Visit<'_>,
        _value: i64,
        _parent: Visit<'_>,
    ) -> Result<(), InternalError> {
        Ok(())
    }
}

pub fn traverse<V: Visitor>(tree: &SourceTree, visitor: &mut V) -> Result<(), InternalError> {
    let root = tree.root();
    let node = tree.get(root).ok_or(InternalError::UnknownNode {
        index: root.index(),
    })?;
    if !matches!(node.kind, NodeKind::Program { .. }) {
        return Err(InternalError::RootNotProgram);
    }
    walk(
        tree,
        visitor,
        Visit {
            id: root,
            node,
            depth: 0,
        },
        None,
    )
}

fn walk<V: Visitor>(
    tree: &SourceTree,
    visitor: &mut V,
    current: Visit<'_>,
    parent: Option<Visit<'_>>,
) -> Result<(), InternalError> {
    if current.node.parent != parent.map(|parent| parent.id) {
        return Err(InternalError::ParentMismatch {
            index: current.id.index(),
        });
    }

    match (&current.node.kind, parent) {
        (NodeKind::Program { .. }, None) => visitor.visit_program(current)?,
        (NodeKind::CallExpression { name, .. }, Some(parent)) => {
            visitor.visit_call_expression(current, name, parent)?
        }
        (NodeKind::NumberLiteral { value }, Some(parent)) => {
            visitor.visit_number_literal(current, *value, parent)?
        }
        (NodeKind::Program { .. }, Some(_)) => {
            return Err(InternalError::MisplacedProgram {
                index: current.id.index(),
            });
        }
        (_, None) => return Err(InternalError::RootNotProgram),
    }

    for &child in current.node.kind.children() {
        let node = tree.get(child).ok_or(InternalError::UnknownNode {
            index: child.index(),
        })?;
        let visit = Visit {
            id: child,
            node,
            depth: current.depth + 1,
        };
        walk(tree, visitor, visit, Some(current))?;
    }
    Ok(())
}
