use std::{iter::Peekable, str::CharIndices};

pub use self::error::{LexError, LexResult};
use crate::token::{Span, Token, TokenKind};

mod error;

/// Scanner state. Name and number runs remember where they started so the
/// token text can be sliced out of the input once the run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Looking,
    InName { start: usize },
    InNumber { start: usize },
}

pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    state: State,
    tokens: Vec<Token<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            state: State::Looking,
            tokens: Vec::new(),
        }
    }

    /// Runs the state machine to the end of the input.
    ///
    /// A character that ends a name or number run is not consumed; it is
    /// looked at again in the `Looking` state on the next step. A run still
    /// open at end of input is flushed as the final token.
    pub fn tokenize(mut self) -> LexResult<Vec<Token<'a>>> {
        while let Some(&(index, c)) = self.chars.peek() {
            match self.state {
                State::Looking => self.look(index, c)?,
                State::InName { start } => {
                    if c.is_ascii_alphabetic() {
                        self.chars.next();
                    } else {
                        self.flush(TokenKind::Name, start, index);
                    }
                }
                State::InNumber { start } => {
                    if c.is_ascii_digit() {
                        self.chars.next();
                    } else {
                        self.flush(TokenKind::Number, start, index);
                    }
                }
            }
        }

        let end = self.input.len();
        match self.state {
            State::Looking => {}
            State::InName { start } => self.flush(TokenKind::Name, start, end),
            State::InNumber { start } => self.flush(TokenKind::Number, start, end),
        }
        Ok(self.tokens)
    }

    fn look(&mut self, index: usize, c: char) -> LexResult<()> {
        match c {
            ' ' | '\t' | '\n' => {
                self.chars.next();
            }
            '(' | ')' => {
                self.chars.next();
                self.push(TokenKind::Paren, index, index + 1);
            }
            c if c.is_ascii_alphabetic() => self.state = State::InName { start: index },
            c if c.is_ascii_digit() => self.state = State::InNumber { start: index },
            _ => {
                return Err(LexError::UnexpectedCharacter {
                    character: c,
                    position: index,
                });
            }
        }
        Ok(())
    }

    fn flush(&mut self, kind: TokenKind, start: usize, end: usize) {
        self.push(kind, start, end);
        self.state = State::Looking;
    }

    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        self.tokens.push(Token::new(
            kind,
            &self.input[start..end],
            Span { start, end },
        ));
    }
}

pub fn tokenize(input: &str) -> LexResult<Vec<Token<'_>>> {
    Lexer::new(input).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn kinds_and_text<'a>(tokens: &[Token<'a>]) -> Vec<(TokenKind, &'a str)> {
        tokens.iter().map(|token| (token.kind, token.text)).collect()
    }

    #[test]
    fn tokenizes_simple_call() {
        let tokens = tokenize("(add 2 2)").expect("tokenize should succeed");
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (TokenKind::Paren, "("),
                (TokenKind::Name, "add"),
                (TokenKind::Number, "2"),
                (TokenKind::Number, "2"),
                (TokenKind::Paren, ")"),
            ]
        );
    }

    #[test]
    fn tokenizes_multiline_nested_program() {
        let input = indoc! {"
            (add 2
              (subtract 40 2))
        "};
        let tokens = tokenize(input).expect("tokenize should succeed");
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (TokenKind::Paren, "("),
                (TokenKind::Name, "add"),
                (TokenKind::Number, "2"),
                (TokenKind::Paren, "("),
                (TokenKind::Name, "subtract"),
                (TokenKind::Number, "40"),
                (TokenKind::Number, "2"),
                (TokenKind::Paren, ")"),
                (TokenKind::Paren, ")"),
            ]
        );
    }

    #[test]
    fn run_ends_without_consuming_the_terminator() {
        let tokens = tokenize("(add)").expect("tokenize should succeed");
        assert_eq!(tokens[1].text, "add");
        assert_eq!(tokens[1].span, Span { start: 1, end: 4 });
        assert!(tokens[2].is_close_paren());
    }

    #[test]
    fn letters_and_digits_split_into_separate_runs() {
        let tokens = tokenize("add2x").expect("tokenize should succeed");
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (TokenKind::Name, "add"),
                (TokenKind::Number, "2"),
                (TokenKind::Name, "x"),
            ]
        );
    }

    #[test]
    fn flushes_name_at_end_of_input() {
        let tokens = tokenize("(add 2 2) foo").expect("tokenize should succeed");
        let last = tokens.last().expect("at least one token");
        assert_eq!((last.kind, last.text), (TokenKind::Name, "foo"));
        assert_eq!(last.span, Span { start: 10, end: 13 });
    }

    #[test]
    fn flushes_number_at_end_of_input() {
        let tokens = tokenize("42").expect("tokenize should succeed");
        assert_eq!(kinds_and_text(&tokens), vec![(TokenKind::Number, "42")]);
    }

    #[test]
    fn empty_and_blank_input_produce_no_tokens() {
        assert!(tokenize("").expect("empty input").is_empty());
        assert!(tokenize(" \t\n").expect("blank input").is_empty());
        assert_eq!(tokenize("\t(\n)").expect("tabs and newlines").len(), 2);
    }

    #[test]
    fn errors_on_invalid_character() {
        let err = tokenize("(add 2 @)").expect_err("expected lexing failure");
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                character: '@',
                position: 7
            }
        );
        assert!(err.to_string().contains("unexpected character"));
    }

    #[test]
    fn carriage_return_is_not_whitespace() {
        let err = tokenize("(add 2 2)\r\n").expect_err("expected lexing failure");
        assert!(matches!(
            err,
            LexError::UnexpectedCharacter {
                character: '\r',
                ..
            }
        ));
    }

    #[test]
    fn token_count_matches_parens_and_runs() {
        let input = "(add 12 (subtract 4 2))(mul 3 3)";
        let tokens = tokenize(input).expect("tokenize should succeed");
        let parens = input.chars().filter(|c| *c == '(' || *c == ')').count();
        let runs = 8; // add 12 subtract 4 2 mul 3 3
        assert_eq!(tokens.len(), parens + runs);
    }
}
