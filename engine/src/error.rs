//! FILENAME: engine/src/error.rs
//! PURPOSE: Error taxonomy of the formula engine.

use risk_parser::{SyntaxError, TokenKind, TokenizeError};
use thiserror::Error;

use crate::formula::Color;

/// Why an operator or the final result could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcErrorReason {
    UnknownToken,
    DifferentTypes,
    OperatorNotDefined,
    TypeCast,
    DivisionByZero,
}

impl std::fmt::Display for CalcErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            CalcErrorReason::UnknownToken => "unknown token",
            CalcErrorReason::DifferentTypes => "operands must be of the same type",
            CalcErrorReason::OperatorNotDefined => "operator not defined for types",
            CalcErrorReason::TypeCast => "typecast error",
            CalcErrorReason::DivisionByZero => "division by zero",
        };
        write!(f, "{}", text)
    }
}

/// Failures of the postfix converter and the evaluator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("unknown token type: {0}")]
    UnknownTokenType(TokenKind),

    /// The identifier is absent from the current row. The batch
    /// orchestrator turns this into a `false` verdict.
    #[error("parameter not found: {0}")]
    UnknownParameter(String),

    #[error("{reason}: {detail}")]
    Calculation {
        reason: CalcErrorReason,
        detail: String,
    },
}

impl EvalError {
    pub fn calculation(reason: CalcErrorReason, detail: impl Into<String>) -> Self {
        EvalError::Calculation {
            reason,
            detail: detail.into(),
        }
    }

    /// The calculation reason, if this is a calculation error.
    pub fn reason(&self) -> Option<CalcErrorReason> {
        match self {
            EvalError::Calculation { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Failure of a single formula against a single row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("calculation failed: {0}")]
    Eval(#[from] EvalError),
}

/// A failed batch. No partial results survive it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculateError {
    #[error("formula '{formula}': {source}")]
    Tokenize {
        formula: String,
        source: TokenizeError,
    },

    #[error("formula '{formula}', row {row}: {source}")]
    Formula {
        formula: String,
        row: usize,
        source: FormulaError,
    },

    #[error("formula '{formula}': color 'black' is reserved for failed calculations")]
    ReservedColor { formula: String },
}

impl CalculateError {
    /// The sentinel color reported alongside a failed batch.
    pub fn color(&self) -> Color {
        Color::Black
    }

    /// Name of the formula that aborted the batch.
    pub fn formula(&self) -> &str {
        match self {
            CalculateError::Tokenize { formula, .. }
            | CalculateError::Formula { formula, .. }
            | CalculateError::ReservedColor { formula } => formula,
        }
    }
}
