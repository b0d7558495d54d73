//! FILENAME: engine/src/calculator.rs
//! PURPOSE: Batch orchestration of formulas over parameter rows.
//! CONTEXT: Formulas are tokenized once up front. Each (row, formula) pair is
//! then run through the grammar parser, the postfix converter and the
//! evaluator. `exists(x)` is resolved during parsing, so parsing is repeated
//! per row.
//!
//! FAILURE POLICY:
//! - A parameter missing from a row makes that formula false for that row.
//! - Every other failure aborts the batch. No partial results are returned
//!   and the caller reports `Color::Black`.

use risk_parser::{parse, tokenize, EmptyParams, ParamLookup, ParamTypes, Token};

use crate::error::{CalculateError, EvalError, FormulaError};
use crate::evaluator::Evaluator;
use crate::formula::{CalculationOutcome, Color, Formula, FormulaResult, Verdict};
use crate::operators::cast_bool;
use crate::postfix::to_postfix;
use crate::{log_debug, log_enter, log_exit, log_warn};

// ============================================================================
// COMPILED FORMULAS
// ============================================================================

/// An enabled formula with its expression already tokenized.
/// Tokens are row-independent and can be reused across batches.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFormula {
    pub name: String,
    pub version: i64,
    pub color: Color,
    pub tokens: Vec<Token>,
}

impl CompiledFormula {
    fn verdict(&self, result: bool) -> Verdict {
        Verdict {
            version: self.version,
            color: self.color,
            result,
        }
    }
}

/// Tokenizes every enabled formula. Disabled formulas are dropped here and
/// take no further part in the batch.
pub fn compile_formulas(
    formulas: &[Formula],
    param_types: &ParamTypes,
) -> Result<Vec<CompiledFormula>, CalculateError> {
    let mut compiled = Vec::with_capacity(formulas.len());

    for formula in formulas.iter().filter(|f| f.enabled) {
        if formula.color == Color::Black {
            return Err(CalculateError::ReservedColor {
                formula: formula.name.clone(),
            });
        }

        let tokens = tokenize(&formula.expression, param_types).map_err(|source| {
            CalculateError::Tokenize {
                formula: formula.name.clone(),
                source,
            }
        })?;

        compiled.push(CompiledFormula {
            name: formula.name.clone(),
            version: formula.version,
            color: formula.color,
            tokens,
        });
    }

    Ok(compiled)
}

// ============================================================================
// SINGLE FORMULA
// ============================================================================

/// Runs one tokenized formula against one row and extracts its boolean verdict.
///
/// A reference to a parameter the row does not carry yields `Ok(false)`.
pub fn evaluate_formula(tokens: &[Token], row: &dyn ParamLookup) -> Result<bool, FormulaError> {
    let calculation = parse(tokens, row)?;
    let postfix = to_postfix(&calculation)?;

    match Evaluator::new(row).evaluate(&postfix) {
        Ok(result) => Ok(cast_bool(&result.text)?),
        Err(EvalError::UnknownParameter(name)) => {
            log_debug!("CALC", "parameter '{}' not in row, verdict is false", name);
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

// ============================================================================
// BATCH
// ============================================================================

/// Evaluates precompiled formulas against every row.
///
/// An empty `rows` slice is treated as a single row without parameters.
pub fn calculate_compiled<P: ParamLookup>(
    compiled: &[CompiledFormula],
    rows: &[P],
) -> Result<CalculationOutcome, CalculateError> {
    log_enter!("CALC", "calculate", "formulas={} rows={}", compiled.len(), rows.len());

    let empty = [EmptyParams];
    let rows: Vec<&dyn ParamLookup> = if rows.is_empty() {
        empty.iter().map(|r| r as &dyn ParamLookup).collect()
    } else {
        rows.iter().map(|r| r as &dyn ParamLookup).collect()
    };

    let mut color = Color::Grey;
    let mut results = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let mut row_result = FormulaResult::default();

        for formula in compiled {
            let verdict = evaluate_formula(&formula.tokens, *row).map_err(|source| {
                log_warn!(
                    "CALC",
                    "formula '{}' failed on row {}: {}",
                    formula.name,
                    index,
                    source
                );
                CalculateError::Formula {
                    formula: formula.name.clone(),
                    row: index,
                    source,
                }
            })?;

            if verdict && formula.color > color {
                color = formula.color;
            }

            row_result.insert(formula.name.clone(), formula.verdict(verdict));
        }

        if !row_result.is_empty() {
            results.push(row_result);
        }
    }

    log_exit!("CALC", "calculate", "color={} rows={}", color, results.len());
    Ok(CalculationOutcome { color, results })
}

/// Tokenizes `formulas` and evaluates them against every row.
pub fn calculate<P: ParamLookup>(
    formulas: &[Formula],
    rows: &[P],
    param_types: &ParamTypes,
) -> Result<CalculationOutcome, CalculateError> {
    let compiled = compile_formulas(formulas, param_types)?;
    calculate_compiled(&compiled, rows)
}
