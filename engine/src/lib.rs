//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the risk formula engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.
//! Token and parameter types come from `risk-parser` and are re-exported
//! here so callers need only one dependency.

#[doc(hidden)]
pub mod logging;

pub mod calculator;
pub mod error;
pub mod evaluator;
pub mod formula;
pub mod operators;
pub mod postfix;

// Re-export commonly used types at the crate root
pub use calculator::{
    calculate, calculate_compiled, compile_formulas, evaluate_formula, CompiledFormula,
};
pub use error::{CalcErrorReason, CalculateError, EvalError, FormulaError};
pub use evaluator::{evaluate, Evaluator};
pub use formula::{CalculationOutcome, Color, Formula, FormulaResult, Verdict};
pub use operators::{cast_bool, cast_number, Operator};
pub use postfix::to_postfix;
pub use risk_parser::{
    EmptyParams, ParamLookup, ParamRow, ParamTypes, SyntaxError, Token, TokenKind,
    TokenizeError, ValueType,
};
