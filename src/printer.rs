//! One-line-per-node dumps of both trees, indented two spaces per level.

use crate::ast::SourceTree;
use crate::error::InternalError;
use crate::target_ast::{TargetId, TargetNode, TargetTree};
use crate::traverse::{Visit, Visitor, traverse};

const INDENT: &str = "  ";

#[derive(Default)]
struct SourceDump {
    output: String,
}

impl SourceDump {
    fn line(&mut self, depth: usize, text: std::fmt::Arguments<'_>) {
        self.output.push_str(&INDENT.repeat(depth));
        self.output.push_str(&text.to_string());
        self.output.push('\n');
    }
}

impl Visitor for SourceDump {
    fn visit_program(&mut self, program: Visit<'_>) -> Result<(), InternalError> {
        self.line(program.depth, format_args!("Program"));
        Ok(())
    }

    fn visit_call_expression(
        &mut self,
        call: Visit<'_>,
        name: &str,
        _parent: Visit<'_>,
    ) -> Result<(), InternalError> {
        self.line(call.depth, format_args!("CallExpression {name}"));
        Ok(())
    }

    fn visit_number_literal(
        &mut self,
        literal: Visit<'_>,
        value: i64,
        _parent: Visit<'_>,
    ) -> Result<(), InternalError> {
        self.line(literal.depth, format_args!("NumberLiteral {value}"));
        Ok(())
    }
}

pub fn dump_source(tree: &SourceTree) -> Result<String, InternalError> {
    let mut dump = SourceDump::default();
    traverse(tree, &mut dump)?;
    Ok(dump.output)
}

pub fn dump_target(tree: &TargetTree) -> Result<String, InternalError> {
    let mut output = String::new();
    dump_target_node(tree, tree.root(), 0, &mut output)?;
    Ok(output)
}

fn dump_target_node(
    tree: &TargetTree,
    id: TargetId,
    depth: usize,
    output: &mut String,
) -> Result<(), InternalError> {
    let node = tree.node(id)?;
    output.push_str(&INDENT.repeat(depth));
    match node {
        TargetNode::Program { .. } => output.push_str("Program"),
        TargetNode::ExpressionStatement { .. } => output.push_str("ExpressionStatement"),
        TargetNode::CallExpression { .. } => output.push_str("CallExpression"),
        TargetNode::Identifier { name } => {
            output.push_str("Identifier ");
            output.push_str(name);
        }
        TargetNode::NumberLiteral { value } => {
            output.push_str("NumberLiteral ");
            output.push_str(&value.to_string());
        }
    }
    output.push('\n');

    for child in node.children() {
        dump_target_node(tree, child, depth + 1, output)?;
    }
    Ok(())
}
