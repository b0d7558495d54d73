//! FILENAME: parser/src/token.rs
//! PURPOSE: Token definitions for the risk formula lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by
//! the grammar parser, the postfix converter and the evaluator. A token keeps
//! its literal source text; numbers and booleans stay text until an operator
//! consumes them.

use serde::{Deserialize, Serialize};

/// Syntactic category of a token.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// `+ - * /`
    ArithOp,
    /// `> < = != >= <=`
    CompOp,
    /// `AND OR`
    LogOp,
    LParen,
    RParen,
    Number,
    Bool,
    Ident,
    /// The `exists` keyword.
    ExistsKeyword,
}

impl TokenKind {
    /// True for the three binary operator kinds.
    pub fn is_operator(self) -> bool {
        matches!(self, TokenKind::ArithOp | TokenKind::CompOp | TokenKind::LogOp)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::ArithOp => "arithmeticOp",
            TokenKind::CompOp => "comparisonOp",
            TokenKind::LogOp => "logicOp",
            TokenKind::LParen => "leftBracket",
            TokenKind::RParen => "rightBracket",
            TokenKind::Number => "number",
            TokenKind::Bool => "boolWord",
            TokenKind::Ident => "identifier",
            TokenKind::ExistsKeyword => "existsFunc",
        };
        write!(f, "{}", name)
    }
}

/// Value type carried by a token.
/// Identifiers take theirs from the declared type table.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Number,
    Bool,
    #[default]
    Unknown,
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Number => write!(f, "number"),
            ValueType::Bool => write!(f, "bool"),
            ValueType::Unknown => write!(f, "unknown"),
        }
    }
}

/// A single lexical unit with its source text.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub value_type: ValueType,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, value_type: ValueType) -> Self {
        Token {
            kind,
            text: text.into(),
            value_type,
        }
    }

    /// Operators, brackets and keywords carry no value type.
    pub fn symbol(kind: TokenKind, text: impl Into<String>) -> Self {
        Token::new(kind, text, ValueType::Unknown)
    }

    pub fn number_literal(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Number, text, ValueType::Number)
    }

    /// A boolean token rendered as `true` / `false`.
    pub fn boolean(value: bool) -> Self {
        Token::new(
            TokenKind::Bool,
            if value { "true" } else { "false" },
            ValueType::Bool,
        )
    }

    /// A number token rendered with six fractional digits (`3.000000`).
    /// Non-finite values render as `+Inf`, `-Inf` and `NaN`.
    pub fn number(value: f64) -> Self {
        let text = if value.is_nan() {
            "NaN".to_string()
        } else if value.is_infinite() {
            if value > 0.0 { "+Inf" } else { "-Inf" }.to_string()
        } else {
            format!("{:.6}", value)
        };
        Token::number_literal(text)
    }

    pub fn ident(name: impl Into<String>, value_type: ValueType) -> Self {
        Token::new(TokenKind::Ident, name, value_type)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
