use crate::error::InternalError;
use crate::target_ast::{TargetId, TargetNode, TargetTree};

/// Widest indentation step accepted for generated code.
pub const MAX_INDENT_WIDTH: usize = 16;

/// Renders a C tree to source text. Rendering is a pure function of the
/// tree and the generator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeGenerator {
    entry_point: String,
    indent_width: usize,
}

impl CodeGenerator {
    /// `indent_width` is capped at [`MAX_INDENT_WIDTH`].
    pub fn new(entry_point: impl Into<String>, indent_width: usize) -> Self {
        Self {
            entry_point: entry_point.into(),
            indent_width: indent_width.min(MAX_INDENT_WIDTH),
        }
    }

    pub fn generate(&self, tree: &TargetTree) -> Result<String, InternalError> {
        self.emit_node(tree, tree.root())
    }

    fn emit_node(&self, tree: &TargetTree, id: TargetId) -> Result<String, InternalError> {
        match tree.node(id)? {
            TargetNode::Program { body } => {
                let mut output = String::new();
                output.push_str(&format!("int {}(void) {{\n", self.entry_point));
                for &statement in body {
                    let line = self.emit_node(tree, statement)?;
                    self.push_line(&mut output, 1, &line);
                }
                self.push_line(&mut output, 1, "return 0;");
                output.push_str("}\n");
                Ok(output)
            }
            TargetNode::ExpressionStatement { expression } => {
                Ok(format!("{};", self.emit_node(tree, *expression)?))
            }
            TargetNode::CallExpression { callee, params } => {
                let callee = self.emit_node(tree, *callee)?;
                let mut rendered_args = Vec::with_capacity(params.len());
                for &param in params {
                    rendered_args.push(self.emit_node(tree, param)?);
                }
                Ok(format!("{callee}({})", rendered_args.join(", ")))
            }
            TargetNode::Identifier { name } => Ok(name.clone()),
            TargetNode::NumberLiteral { value } => Ok(value.to_string()),
        }
    }

    fn push_line(&self, output: &mut String, indent: usize, line: &str) {
        output.push_str(&" ".repeat(indent * self.indent_width));
        output.push_str(line);
        output.push('\n');
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new("main", 4)
    }
}

pub fn generate(tree: &TargetTree) -> Result<String, InternalError> {
    CodeGenerator::default().generate(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target_ast::TargetBuilder;
    use indoc::indoc;

    fn single_statement(build: impl FnOnce(&mut TargetBuilder) -> TargetId) -> TargetTree {
        let mut builder = TargetBuilder::new();
        let program = builder.program();
        let expression = build(&mut builder);
        let statement = builder.expression_statement(expression);
        builder.append(program, statement).expect("append");
        builder.finish(program).expect("finish")
    }

    #[test]
    fn renders_program_with_nested_call() {
        let tree = single_statement(|builder| {
            let add = builder.call_expression("add");
            let two = builder.number(2);
            builder.append(add, two).expect("append");
            let subtract = builder.call_expression("subtract");
            builder.append(add, subtract).expect("append");
            for value in [4, 2] {
                let literal = builder.number(value);
                builder.append(subtract, literal).expect("append");
            }
            add
        });

        let expected = indoc! {"
            int main(void) {
                add(2, subtract(4, 2));
                return 0;
            }
        "};
        assert_eq!(generate(&tree).expect("generate"), expected);
    }

    #[test]
    fn separators_only_between_arguments() {
        let tree = single_statement(|builder| {
            let call = builder.call_expression("sum");
            for value in [1, 22, 333] {
                let literal = builder.number(value);
                builder.append(call, literal).expect("append");
            }
            call
        });
        let output = generate(&tree).expect("generate");
        assert!(output.contains("    sum(1, 22, 333);\n"));
        assert_eq!(output.matches("22").count(), 1);
    }

    #[test]
    fn renders_calls_without_arguments() {
        let tree = single_statement(|builder| builder.call_expression("now"));
        assert!(generate(&tree).expect("generate").contains("now();"));
    }

    #[test]
    fn renders_empty_program() {
        let mut builder = TargetBuilder::new();
        let program = builder.program();
        let tree = builder.finish(program).expect("finish");
        assert_eq!(
            generate(&tree).expect("generate"),
            "int main(void) {\n    return 0;\n}\n"
        );
    }

    #[test]
    fn honours_entry_point_and_indent_settings() {
        let tree = single_statement(|builder| builder.call_expression("tick"));
        let output = CodeGenerator::new("entry", 2)
            .generate(&tree)
            .expect("generate");
        assert_eq!(output, "int entry(void) {\n  tick();\n  return 0;\n}\n");
    }

    #[test]
    fn rendering_is_deterministic() {
        let tree = single_statement(|builder| {
            let call = builder.call_expression("add");
            let literal = builder.number(7);
            builder.append(call, literal).expect("append");
            call
        });
        let generator = CodeGenerator::default();
        assert_eq!(
            generator.generate(&tree).expect("first"),
            generator.generate(&tree).expect("second")
        );
    }

    #[test]
    fn oversized_indent_is_capped() {
        let tree = single_statement(|builder| builder.call_expression("tick"));
        let output = CodeGenerator::new("main", usize::MAX)
            .generate(&tree)
            .expect("generate");
        let indent = " ".repeat(MAX_INDENT_WIDTH);
        assert!(output.contains(&format!("\n{indent}tick();\n")));
    }
}
