pub mod ast;
pub mod codegen;
pub mod compiler;
pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod target_ast;
pub mod token;
pub mod transformer;
pub mod traverse;

pub use compiler::{Compilation, TreeDumps, compile, compile_with};
pub use config::Config;
pub use error::{CompileError, InternalError};
