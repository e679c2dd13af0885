use rustc_hash::FxHashMap;
use tracing::trace;

use crate::ast::{NodeId, NodeKind, SourceTree};
use crate::error::InternalError;
use crate::target_ast::{TargetBuilder, TargetId, TargetTree};
use crate::traverse::{Visit, Visitor, traverse};

/// Builds the C tree while the source tree is walked.
///
/// `insertion_targets` maps each visited source node to the C node whose
/// child list receives whatever is derived from that source node's children.
/// Pre-order traversal registers a parent before any child looks it up.
pub struct Transformer {
    builder: TargetBuilder,
    root: Option<TargetId>,
    insertion_targets: FxHashMap<NodeId, TargetId>,
}

impl Transformer {
    pub fn new() -> Self {
        Self {
            builder: TargetBuilder::new(),
            root: None,
            insertion_targets: FxHashMap::default(),
        }
    }

    pub fn transform(mut self, tree: &SourceTree) -> Result<TargetTree, InternalError> {
        traverse(tree, &mut self)?;
        let root = self.root.ok_or(InternalError::RootNotProgram)?;
        self.builder.finish(root)
    }

    fn insertion_target(&self, source: NodeId) -> Result<TargetId, InternalError> {
        self.insertion_targets
            .get(&source)
            .copied()
            .ok_or(InternalError::MissingInsertionTarget {
                index: source.index(),
            })
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for Transformer {
    fn visit_program(&mut self, program: Visit<'_>) -> Result<(), InternalError> {
        let target = self.builder.program();
        self.root = Some(target);
        self.insertion_targets.insert(program.id, target);
        Ok(())
    }

    fn visit_call_expression(
        &mut self,
        call: Visit<'_>,
        name: &str,
        parent: Visit<'_>,
    ) -> Result<(), InternalError> {
        let target = self.builder.call_expression(name);
        self.insertion_targets.insert(call.id, target);

        // Only calls directly under the program become statements.
        let placed = match parent.node.kind {
            NodeKind::CallExpression { .. } => target,
            _ => self.builder.expression_statement(target),
        };
        let destination = self.insertion_target(parent.id)?;
        trace!(name, depth = call.depth, "lowered call expression");
        self.builder.append(destination, placed)
    }

    fn visit_number_literal(
        &mut self,
        literal: Visit<'_>,
        value: i64,
        parent: Visit<'_>,
    ) -> Result<(), InternalError> {
        let target = self.builder.number(value);
        let destination = self.insertion_target(parent.id)?;
        trace!(value, depth = literal.depth, "lowered number literal");
        self.builder.append(destination, target)
    }
}

pub fn transform(tree: &SourceTree) -> Result<TargetTree, InternalError> {
    Transformer::new().transform(tree)
}
