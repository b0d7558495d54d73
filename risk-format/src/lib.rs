//! FILENAME: risk-format/src/lib.rs
//! Risk Format Module
//!
//! JSON surface of the risk engine: rule sets (formulas and declared
//! parameter types), parameter row documents, and calculation outcomes.

mod error;
mod rows;
mod rules;

pub use error::FormatError;
pub use rows::{load_rows, parse_rows};
pub use rules::{load_rule_set, save_rule_set, RuleSet};

use risk_engine::CalculationOutcome;

/// Renders a batch outcome as
/// `{"color": ..., "results": [{name: {version, color, result}}]}`.
pub fn outcome_to_json(outcome: &CalculationOutcome) -> Result<String, FormatError> {
    Ok(serde_json::to_string(outcome)?)
}
