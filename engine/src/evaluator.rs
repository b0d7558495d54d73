//! FILENAME: engine/src/evaluator.rs
//! PURPOSE: Evaluates postfix token sequences on a typed value stack.
//! CONTEXT: After the grammar parser and the postfix converter, this module
//! walks the postfix tokens once. Literals are pushed as they are,
//! identifiers are replaced by the raw text the current row holds for them
//! (keeping their declared type), and operators pop their two operands and
//! push the result.
//!
//! The raw text is not cast here. Casting happens inside the operators so
//! that a malformed value surfaces as a typecast error at its point of use.

use risk_parser::{ParamLookup, Token, TokenKind, TokenStack, ValueType};

use crate::error::{CalcErrorReason, EvalError};
use crate::postfix::operator_of;

/// The postfix evaluator.
/// Holds a reference to the parameter row identifiers resolve against.
pub struct Evaluator<'a> {
    params: &'a dyn ParamLookup,
}

impl<'a> Evaluator<'a> {
    pub fn new(params: &'a dyn ParamLookup) -> Self {
        Evaluator { params }
    }

    /// Evaluates `postfix` down to a single boolean or number token.
    pub fn evaluate(&self, postfix: &[Token]) -> Result<Token, EvalError> {
        let mut stack = TokenStack::with_capacity(postfix.len());

        for token in postfix {
            match token.kind {
                kind if kind.is_operator() => {
                    let op = operator_of(token)?;
                    let right = self.pop_operand(&mut stack, token)?;
                    let left = self.pop_operand(&mut stack, token)?;
                    stack.push(op.apply(&left, &right)?);
                }

                TokenKind::Number | TokenKind::Bool => stack.push(token.clone()),

                TokenKind::Ident => stack.push(self.resolve(token)?),

                kind => return Err(EvalError::UnknownTokenType(kind)),
            }
        }

        let result = stack.pop().ok_or_else(|| {
            EvalError::calculation(CalcErrorReason::UnknownToken, "empty expression")
        })?;

        if !stack.is_empty() {
            return Err(EvalError::calculation(
                CalcErrorReason::UnknownToken,
                format!("{} values left after '{}'", stack.len(), result.text),
            ));
        }

        match result.value_type {
            ValueType::Bool => Ok(Token::new(TokenKind::Bool, result.text, ValueType::Bool)),
            ValueType::Number => Ok(Token::number_literal(result.text)),
            ValueType::Unknown => Err(EvalError::calculation(
                CalcErrorReason::UnknownToken,
                result.text,
            )),
        }
    }

    /// Replaces an identifier with the row's raw text for it.
    fn resolve(&self, token: &Token) -> Result<Token, EvalError> {
        let raw = self
            .params
            .lookup(&token.text)
            .ok_or_else(|| EvalError::UnknownParameter(token.text.clone()))?;

        Ok(Token::new(TokenKind::Ident, raw, token.value_type))
    }

    fn pop_operand(&self, stack: &mut TokenStack, op: &Token) -> Result<Token, EvalError> {
        stack.pop().ok_or_else(|| {
            EvalError::calculation(
                CalcErrorReason::UnknownToken,
                format!("missing operand for '{}'", op.text),
            )
        })
    }
}

/// Convenience function to evaluate postfix tokens against a row.
pub fn evaluate(postfix: &[Token], params: &dyn ParamLookup) -> Result<Token, EvalError> {
    Evaluator::new(params).evaluate(postfix)
}
