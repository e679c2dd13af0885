//! Runs the four stages in order: tokenize, parse, transform, generate.
//!
//! Each stage consumes the previous stage's complete output. The first
//! failure aborts the compile; nothing partial is returned.

use tracing::debug;

use crate::ast::SourceTree;
use crate::codegen::CodeGenerator;
use crate::config::Config;
use crate::error::CompileError;
use crate::lexer;
use crate::parser::Parser;
use crate::printer::{dump_source, dump_target};
use crate::target_ast::TargetTree;
use crate::token::Token;
use crate::transformer::Transformer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeDumps {
    pub source: String,
    pub target: String,
}

/// Everything one compile produced, stage by stage.
#[derive(Debug)]
pub struct Compilation<'a> {
    pub tokens: Vec<Token<'a>>,
    pub source: SourceTree,
    pub target: TargetTree,
    pub dumps: Option<TreeDumps>,
    pub output: String,
}

#[tracing::instrument(skip_all, fields(input_len = input.len()))]
pub fn compile_with<'a>(input: &'a str, config: &Config) -> Result<Compilation<'a>, CompileError> {
    let tokens = lexer::tokenize(input)?;
    debug!(tokens = tokens.len(), "tokenized input");

    let source = Parser::new(tokens.clone())
        .with_max_depth(config.max_depth)
        .parse_program()?;
    debug!(nodes = source.len(), "parsed source tree");

    let target = Transformer::new().transform(&source)?;
    debug!(nodes = target.len(), "built target tree");

    let dumps = if config.dump_trees {
        Some(TreeDumps {
            source: dump_source(&source)?,
            target: dump_target(&target)?,
        })
    } else {
        None
    };

    let output = CodeGenerator::new(config.entry_point.as_str(), config.indent_width)
        .generate(&target)?;
    debug!(bytes = output.len(), "generated C source");

    Ok(Compilation {
        tokens,
        source,
        target,
        dumps,
        output,
    })
}

/// Compiles with default settings and returns only the generated C.
pub fn compile(input: &str) -> Result<String, CompileError> {
    compile_with(input, &Config::default()).map(|compilation| compilation.output)
}
