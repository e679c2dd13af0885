#![allow(dead_code)]
use std::fs;

use lisp2c::ast::SourceTree;
use lisp2c::{lexer, parser};

pub const WORKLOADS: [(&str, &str); 2] = [
    ("nested", "tests/programs/nested_call/program.lisp"),
    ("multiline", "tests/programs/multiline_program/program.lisp"),
];

pub fn load_source(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| panic!("read {path}: {err}"))
}

pub fn load_tree(source: &str) -> SourceTree {
    let tokens = lexer::tokenize(source).unwrap_or_else(|err| panic!("tokenize: {err}"));
    parser::parse_tokens(tokens).unwrap_or_else(|err| panic!("parse: {err}"))
}

/// A wide, moderately deep program: `count` statements of the shape
/// `(add 1 (sub 2 (mul 3 ... )))` nested `depth` levels.
pub fn synthetic_source(count: usize, depth: usize) -> String {
    let mut statement = String::new();
    for level in 0..depth {
        statement.push_str(&format!("(op {level} "));
    }
    statement.push_str(&")".repeat(depth));
    let mut source = String::with_capacity(statement.len() * count + count);
    for _ in 0..count {
        source.push_str(&statement);
        source.push('\n');
    }
    source
}
