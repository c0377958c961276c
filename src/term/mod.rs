//! Solver symbols: the terms a model is made of, and a parser for their text form

pub mod ast;
mod grammar;
pub mod lexer;

pub use ast::*;
pub use grammar::{parse_symbol, parse_symbols};
