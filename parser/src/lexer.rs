//! FILENAME: parser/src/lexer.rs
//! PURPOSE: Scans a raw formula expression and produces a vector of Tokens.
//! CONTEXT: This is the first stage of the pipeline. It skips whitespace,
//! classifies words (booleans, AND/OR, exists, identifiers), reads numbers by
//! probing the float parser one character at a time, and reads the
//! multi-character comparison operators.
//!
//! SUPPORTED OPERATORS:
//! - Arithmetic: + - * /
//! - Comparison: = != > < >= <=
//! - Logic keywords: AND OR
//! - Brackets: ( )
//!
//! There is no standalone negation: a `!` must be followed by `=`.

use thiserror::Error;

use crate::params::ParamTypes;
use crate::token::{Token, TokenKind, ValueType};

/// The input contained a character no token starts with.
/// The position is a character index into the expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid token at position: {position}")]
pub struct TokenizeError {
    pub position: usize,
}

pub struct Lexer<'a> {
    chars: Vec<char>,
    pos: usize,
    param_types: &'a ParamTypes,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &str, param_types: &'a ParamTypes) -> Self {
        Lexer {
            chars: input.chars().collect(),
            pos: 0,
            param_types,
        }
    }

    /// Advances the lexer and returns the next token, or `None` at the end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, TokenizeError> {
        self.skip_whitespace();

        let Some(&ch) = self.chars.get(self.pos) else {
            return Ok(None);
        };

        let token = match ch {
            ch if ch.is_ascii_alphabetic() => self.read_word(),
            '+' | '-' | '*' | '/' => self.single(TokenKind::ArithOp, ch),
            '(' => self.single(TokenKind::LParen, ch),
            ')' => self.single(TokenKind::RParen, ch),
            '>' | '<' | '=' | '!' => match self.read_comparison() {
                Some(token) => token,
                None => return Err(TokenizeError { position: self.pos }),
            },
            _ => match self.read_number() {
                Some(token) => token,
                None => return Err(TokenizeError { position: self.pos }),
            },
        };

        Ok(Some(token))
    }

    fn skip_whitespace(&mut self) {
        while self.chars.get(self.pos).is_some_and(|ch| ch.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn single(&mut self, kind: TokenKind, ch: char) -> Token {
        self.pos += 1;
        Token::symbol(kind, ch)
    }

    /// Reads a word: a letter followed by letters, digits or underscores.
    fn read_word(&mut self) -> Token {
        let start = self.pos;
        self.pos += 1;
        while self
            .chars
            .get(self.pos)
            .is_some_and(|&ch| ch.is_ascii_alphanumeric() || ch == '_')
        {
            self.pos += 1;
        }

        let word: String = self.chars[start..self.pos].iter().collect();

        match word.as_str() {
            "true" | "false" => Token::new(TokenKind::Bool, word, ValueType::Bool),
            "AND" | "OR" => Token::symbol(TokenKind::LogOp, word),
            "exists" => Token::symbol(TokenKind::ExistsKeyword, word),
            _ => {
                let value_type = self
                    .param_types
                    .get(&word)
                    .copied()
                    .unwrap_or(ValueType::Unknown);
                Token::ident(word, value_type)
            }
        }
    }

    /// Handles operators starting with '>', '<', '=' or '!'.
    /// A lone '!' is not an operator.
    fn read_comparison(&mut self) -> Option<Token> {
        let first = self.chars[self.pos];
        let followed_by_eq = self.chars.get(self.pos + 1) == Some(&'=');

        let len = match first {
            '>' | '<' if followed_by_eq => 2,
            '>' | '<' | '=' => 1,
            '!' if followed_by_eq => 2,
            _ => return None,
        };

        let text: String = self.chars[self.pos..self.pos + len].iter().collect();
        self.pos += len;
        Some(Token::symbol(TokenKind::CompOp, text))
    }

    /// Reads the longest run of characters that still parses as a float,
    /// growing the candidate one character at a time.
    fn read_number(&mut self) -> Option<Token> {
        let start = self.pos;
        let mut candidate = String::new();

        while let Some(&ch) = self.chars.get(self.pos) {
            candidate.push(ch);
            if candidate.parse::<f64>().is_err() {
                candidate.pop();
                break;
            }
            self.pos += 1;
        }

        if self.pos == start {
            return None;
        }

        Some(Token::number_literal(candidate))
    }
}

/// Tokenizes a whole expression. Fails on the first unrecognized character;
/// no partial token list is returned.
pub fn tokenize(input: &str, param_types: &ParamTypes) -> Result<Vec<Token>, TokenizeError> {
    let mut lexer = Lexer::new(input, param_types);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}
