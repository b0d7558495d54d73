//! FILENAME: engine/src/postfix.rs
//! PURPOSE: Reorders calculation tokens from infix to postfix (shunting yard).
//! CONTEXT: Input comes from the grammar parser, which already guarantees
//! balanced brackets; unbalanced input is tolerated silently here.
//!
//! An incoming operator pops stack entries only while their precedence is
//! strictly greater than its own. Equal-precedence chains therefore group to
//! the right: `10 - 5 - 2` is evaluated as `10 - (5 - 2)`.

use risk_parser::{Token, TokenKind, TokenStack};

use crate::error::{CalcErrorReason, EvalError};
use crate::operators::{Operator, LPAREN_PRECEDENCE};

/// Converts infix calculation tokens to postfix order.
pub fn to_postfix(infix: &[Token]) -> Result<Vec<Token>, EvalError> {
    let mut operators = TokenStack::with_capacity(infix.len());
    let mut output = Vec::with_capacity(infix.len());

    for token in infix {
        match token.kind {
            TokenKind::Number | TokenKind::Bool | TokenKind::Ident => output.push(token.clone()),

            TokenKind::LParen => operators.push(token.clone()),

            TokenKind::RParen => {
                while let Some(top) = operators.pop() {
                    if top.kind == TokenKind::LParen {
                        break;
                    }
                    output.push(top);
                }
            }

            TokenKind::ArithOp | TokenKind::CompOp | TokenKind::LogOp => {
                let weight = operator_of(token)?.precedence();

                while operators
                    .peek()
                    .is_some_and(|top| stack_precedence(top) > weight)
                {
                    if let Some(top) = operators.pop() {
                        output.push(top);
                    }
                }

                operators.push(token.clone());
            }

            kind => return Err(EvalError::UnknownTokenType(kind)),
        }
    }

    while let Some(top) = operators.pop() {
        output.push(top);
    }

    Ok(output)
}

/// Resolves an operator token to its operator.
pub(crate) fn operator_of(token: &Token) -> Result<Operator, EvalError> {
    Operator::from_symbol(&token.text)
        .ok_or_else(|| EvalError::calculation(CalcErrorReason::UnknownToken, token.text.clone()))
}

/// Precedence of an entry already on the operator stack.
fn stack_precedence(token: &Token) -> u8 {
    match token.kind {
        TokenKind::LParen => LPAREN_PRECEDENCE,
        _ => Operator::from_symbol(&token.text).map_or(0, Operator::precedence),
    }
}
