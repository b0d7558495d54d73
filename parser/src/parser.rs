//! FILENAME: parser/src/parser.rs
//! PURPOSE: Backtracking recursive descent validator for formula token streams.
//! CONTEXT: This is the second stage of the pipeline. It checks that the
//! tokens form a valid formula and, while matching, emits the calculation
//! tokens: the infix subsequence handed to the postfix converter.
//!
//! GRAMMAR:
//!   start       --> logic_exp                        (all tokens consumed)
//!   logic_exp   --> logic_term ( (LOG_OP | COMP_OP) logic_term )*
//!   logic_term  --> BOOL | exists_call | arith_exp | "(" logic_exp ")"
//!   exists_call --> EXISTS "(" IDENT ")"
//!   arith_exp   --> arith_term ( ARITH_OP arith_term )*
//!   arith_term  --> NUMBER | IDENT | "(" arith_exp ")"
//!
//! EMISSION:
//! - booleans, logic/comparison operators and the brackets around a nested
//!   logic_exp are emitted as matched
//! - a matched arith_exp is emitted as its whole token span
//! - exists(IDENT) is resolved against the row right away and emitted as a
//!   single boolean token
//!
//! Every rule takes a start position and returns the position after its
//! match. Because the position is passed by value, a failed alternative
//! rolls back by simply not using its result; `attempt` also drops anything
//! the failed rule emitted.

use thiserror::Error;

use crate::params::ParamLookup;
use crate::token::{Token, TokenKind};

/// The tokens do not form a formula, or tokens remain after a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("found a syntax error")]
pub struct SyntaxError;

type Rule<'a> = fn(&GrammarParser<'a>, usize, &mut Vec<Token>) -> Option<usize>;

pub struct GrammarParser<'a> {
    tokens: &'a [Token],
    params: &'a dyn ParamLookup,
}

impl<'a> GrammarParser<'a> {
    pub fn new(tokens: &'a [Token], params: &'a dyn ParamLookup) -> Self {
        GrammarParser { tokens, params }
    }

    /// Validates the whole token slice and returns the calculation tokens.
    pub fn parse(&self) -> Result<Vec<Token>, SyntaxError> {
        let mut out = Vec::with_capacity(self.tokens.len());

        match self.logic_exp(0, &mut out) {
            Some(end) if end == self.tokens.len() => Ok(out),
            _ => Err(SyntaxError),
        }
    }

    // ========================================
    // COMBINATORS
    // ========================================

    /// Runs `rule` at `pos`. On failure, everything it emitted is discarded.
    fn attempt(&self, pos: usize, out: &mut Vec<Token>, rule: Rule<'a>) -> Option<usize> {
        let mark = out.len();
        let matched = rule(self, pos, out);
        if matched.is_none() {
            out.truncate(mark);
        }
        matched
    }

    /// Tries the alternatives in order and keeps the first that matches.
    fn first_of(&self, pos: usize, out: &mut Vec<Token>, alternatives: &[Rule<'a>]) -> Option<usize> {
        alternatives
            .iter()
            .find_map(|&rule| self.attempt(pos, out, rule))
    }

    /// Applies `rule` for as long as it matches. Never fails.
    fn zero_or_more(&self, mut pos: usize, out: &mut Vec<Token>, rule: Rule<'a>) -> usize {
        while let Some(next) = self.attempt(pos, out, rule) {
            pos = next;
        }
        pos
    }

    /// Matches a single token of `kind`.
    fn expect(&self, pos: usize, kind: TokenKind) -> Option<usize> {
        match self.tokens.get(pos) {
            Some(token) if token.kind == kind => Some(pos + 1),
            _ => None,
        }
    }

    /// Matches a single token of `kind` and emits it.
    fn expect_emit(&self, pos: usize, out: &mut Vec<Token>, kind: TokenKind) -> Option<usize> {
        let next = self.expect(pos, kind)?;
        out.push(self.tokens[pos].clone());
        Some(next)
    }

    // ========================================
    // LOGIC RULES
    // ========================================

    fn logic_exp(&self, pos: usize, out: &mut Vec<Token>) -> Option<usize> {
        let pos = self.logic_term(pos, out)?;
        Some(self.zero_or_more(pos, out, Self::logic_tail))
    }

    /// (LOG_OP | COMP_OP) logic_term
    fn logic_tail(&self, pos: usize, out: &mut Vec<Token>) -> Option<usize> {
        let pos = self
            .expect_emit(pos, out, TokenKind::LogOp)
            .or_else(|| self.expect_emit(pos, out, TokenKind::CompOp))?;
        self.logic_term(pos, out)
    }

    fn logic_term(&self, pos: usize, out: &mut Vec<Token>) -> Option<usize> {
        self.first_of(
            pos,
            out,
            &[
                Self::bool_literal,
                Self::exists_call,
                Self::arith_span,
                Self::bracketed_logic,
            ],
        )
    }

    fn bool_literal(&self, pos: usize, out: &mut Vec<Token>) -> Option<usize> {
        self.expect_emit(pos, out, TokenKind::Bool)
    }

    /// EXISTS "(" IDENT ")", resolved against the current row.
    fn exists_call(&self, pos: usize, out: &mut Vec<Token>) -> Option<usize> {
        let pos = self.expect(pos, TokenKind::ExistsKeyword)?;
        let pos = self.expect(pos, TokenKind::LParen)?;
        let name_pos = pos;
        let pos = self.expect(pos, TokenKind::Ident)?;
        let pos = self.expect(pos, TokenKind::RParen)?;

        let present = self.params.contains(&self.tokens[name_pos].text);
        out.push(Token::boolean(present));
        Some(pos)
    }

    /// An arithmetic expression, emitted as its full token span.
    fn arith_span(&self, pos: usize, out: &mut Vec<Token>) -> Option<usize> {
        let end = self.arith_exp(pos, out)?;
        out.extend_from_slice(&self.tokens[pos..end]);
        Some(end)
    }

    fn bracketed_logic(&self, pos: usize, out: &mut Vec<Token>) -> Option<usize> {
        let pos = self.expect_emit(pos, out, TokenKind::LParen)?;
        let pos = self.logic_exp(pos, out)?;
        self.expect_emit(pos, out, TokenKind::RParen)
    }

    // ========================================
    // ARITHMETIC RULES (match only, never emit)
    // ========================================

    fn arith_exp(&self, pos: usize, out: &mut Vec<Token>) -> Option<usize> {
        let pos = self.arith_term(pos, out)?;
        Some(self.zero_or_more(pos, out, Self::arith_tail))
    }

    /// ARITH_OP arith_term
    fn arith_tail(&self, pos: usize, out: &mut Vec<Token>) -> Option<usize> {
        let pos = self.expect(pos, TokenKind::ArithOp)?;
        self.arith_term(pos, out)
    }

    fn arith_term(&self, pos: usize, out: &mut Vec<Token>) -> Option<usize> {
        self.first_of(
            pos,
            out,
            &[Self::number_literal, Self::identifier, Self::bracketed_arith],
        )
    }

    fn number_literal(&self, pos: usize, _out: &mut Vec<Token>) -> Option<usize> {
        self.expect(pos, TokenKind::Number)
    }

    fn identifier(&self, pos: usize, _out: &mut Vec<Token>) -> Option<usize> {
        self.expect(pos, TokenKind::Ident)
    }

    fn bracketed_arith(&self, pos: usize, out: &mut Vec<Token>) -> Option<usize> {
        let pos = self.expect(pos, TokenKind::LParen)?;
        let pos = self.arith_exp(pos, out)?;
        self.expect(pos, TokenKind::RParen)
    }
}

/// Convenience function: validate `tokens` and resolve `exists` against `params`.
pub fn parse(tokens: &[Token], params: &dyn ParamLookup) -> Result<Vec<Token>, SyntaxError> {
    GrammarParser::new(tokens, params).parse()
}
