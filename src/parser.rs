use crate::ast::{NodeId, SourceTree, TreeBuilder};
use crate::token::{Token, TokenKind};

pub use self::error::{ParseError, ParseResult};

mod error;

/// Nesting bound applied when the caller does not pick one.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Largest nesting bound a caller may pick. Every later stage recurses once
/// per level, so this keeps the whole pipeline inside an ordinary thread stack.
pub const MAX_SUPPORTED_DEPTH: usize = 1024;

pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    position: usize,
    max_depth: usize,
    builder: TreeBuilder,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token<'a>>) -> Self {
        Self {
            tokens,
            position: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            builder: TreeBuilder::new(),
        }
    }

    /// Sets the nesting bound, capped at [`MAX_SUPPORTED_DEPTH`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_SUPPORTED_DEPTH);
        self
    }

    pub fn parse_program(mut self) -> ParseResult<SourceTree> {
        let mut body = Vec::new();
        while let Some(token) = self.current() {
            if !token.is_open_paren() {
                return Err(ParseError::ExpectedOpenParen {
                    found: token.text.to_string(),
                    position: token.span.start,
                });
            }
            body.push(self.parse_call_expression(1)?);
        }
        Ok(self.builder.program(body))
    }

    /// Parses `'(' Name Argument* ')'` with the cursor on the opening paren.
    fn parse_call_expression(&mut self, depth: usize) -> ParseResult<NodeId> {
        let open = self.advance();
        if depth > self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
                position: open.span.start,
            });
        }

        let name = match self.current() {
            Some(token) if token.kind == TokenKind::Name => {
                self.advance();
                token.text
            }
            Some(token) => {
                return Err(ParseError::ExpectedFunctionName {
                    position: token.span.start,
                });
            }
            None => {
                return Err(ParseError::ExpectedFunctionName {
                    position: open.span.end,
                });
            }
        };

        let mut params = Vec::new();
        loop {
            let Some(token) = self.current() else {
                return Err(ParseError::UnterminatedCall {
                    position: open.span.start,
                });
            };
            match token.kind {
                TokenKind::Paren if token.is_close_paren() => {
                    self.advance();
                    break;
                }
                TokenKind::Paren => params.push(self.parse_call_expression(depth + 1)?),
                TokenKind::Number => {
                    let value = parse_integer(&token)?;
                    self.advance();
                    params.push(self.builder.number(value));
                }
                TokenKind::Name => {
                    return Err(ParseError::UnexpectedName {
                        name: token.text.to_string(),
                        position: token.span.start,
                    });
                }
            }
        }

        Ok(self.builder.call(name, params))
    }

    fn current(&self) -> Option<Token<'a>> {
        self.tokens.get(self.position).copied()
    }

    /// Moves past the current token. Only called after `current` returned it.
    fn advance(&mut self) -> Token<'a> {
        let token = self.tokens[self.position];
        self.position += 1;
        token
    }
}

fn parse_integer(token: &Token<'_>) -> ParseResult<i64> {
    token
        .text
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidInteger {
            literal: token.text.to_string(),
            position: token.span.start,
        })
}

pub fn parse_tokens(tokens: Vec<Token<'_>>) -> ParseResult<SourceTree> {
    Parser::new(tokens).parse_program()
}
