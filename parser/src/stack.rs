//! FILENAME: parser/src/stack.rs
//! PURPOSE: Small LIFO container of tokens.
//! CONTEXT: Used as the operator stack by the postfix converter and as the
//! value stack by the evaluator.

use smallvec::SmallVec;

use crate::token::Token;

#[derive(Debug, Clone, Default)]
pub struct TokenStack {
    items: SmallVec<[Token; 8]>,
}

impl TokenStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenStack {
            items: SmallVec::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn push(&mut self, token: Token) {
        self.items.push(token);
    }

    pub fn pop(&mut self) -> Option<Token> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&Token> {
        self.items.last()
    }
}
