//! Command front end: tokenizer, typed commands and the line parser

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{AddCommand, Command, EndKind, Property};
pub use parser::parse_line;
