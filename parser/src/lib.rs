//! FILENAME: parser/src/lib.rs
//! PURPOSE: Library root for the risk formula parser.
//! CONTEXT: This crate exposes the lexer, the token model and the grammar
//! parser needed to turn a formula expression into the calculation tokens
//! the engine converts and evaluates.
//!
//! PIPELINE: Expression --> Lexer --> Tokens --> GrammarParser --> Calculation tokens
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, /
//! - Comparison: =, !=, <, >, <=, >=
//! - Logic: AND, OR
//! - Boolean literals: true, false
//! - Identifiers resolved per data row, typed by a declared type table
//! - exists(identifier), resolved per data row
//! - Parentheses for grouping

pub mod lexer;
pub mod params;
pub mod parser;
pub mod stack;
pub mod token;

#[cfg(test)]
mod tests;

pub use lexer::{tokenize, Lexer, TokenizeError};
pub use params::{EmptyParams, ParamLookup, ParamRow, ParamTypes};
pub use parser::{parse, GrammarParser, SyntaxError};
pub use stack::TokenStack;
pub use token::{Token, TokenKind, ValueType};
