use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("program must start with '(' (found '{found}' at position {position})")]
    ExpectedOpenParen { found: String, position: usize },
    #[error("expecting function name after '(' at position {position}")]
    ExpectedFunctionName { position: usize },
    #[error("unexpected name in argument list: '{name}' at position {position}")]
    UnexpectedName { name: String, position: usize },
    #[error("missing ')' to end call expression opened at position {position}")]
    UnterminatedCall { position: usize },
    #[error("integer literal '{literal}' at position {position} does not fit in 64 bits")]
    InvalidInteger { literal: String, position: usize },
    #[error("call expressions nested deeper than {limit} levels at position {position}")]
    NestingTooDeep { limit: usize, position: usize },
}

pub type ParseResult<T> = Result<T, ParseError>;
