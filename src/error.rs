use thiserror::Error;

use crate::lexer::LexError;
use crate::parser::ParseError;

/// Faults that cannot happen on a tree built by the parser. Seeing one means
/// a tree was assembled by hand with dangling or misplaced ids.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InternalError {
    #[error("node #{index} is not part of this tree")]
    UnknownNode { index: usize },
    #[error("tree root is not a Program node")]
    RootNotProgram,
    #[error("Program node #{index} found below the root")]
    MisplacedProgram { index: usize },
    #[error("node #{index} does not point back at the node that owns it")]
    ParentMismatch { index: usize },
    #[error("no insertion target registered for source node #{index}")]
    MissingInsertionTarget { index: usize },
    #[error("target node #{index} cannot hold children")]
    InvalidInsertionTarget { index: usize },
    #[error("target node #{index} is not part of this tree")]
    UnknownTargetNode { index: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("internal consistency error: {0}")]
    Internal(#[from] InternalError),
}
