//! FILENAME: risk-format/src/rules.rs
//! PURPOSE: JSON rule sets: the formulas plus the declared parameter types.
//! CONTEXT: A rule set document looks like
//!
//! ```json
//! {
//!   "formulas": [
//!     { "name": "f1", "expression": "s2001 > 0", "color": "green", "version": 1 }
//!   ],
//!   "param_types": { "s2001": "number", "bool_param": "bool" }
//! }
//! ```
//!
//! `version` defaults to 0 and `enabled` (alias `is_enable`) to true.

use std::fs;
use std::path::Path;

use risk_engine::{
    calculate_compiled, compile_formulas, log_info, CalculationOutcome, CompiledFormula, Formula,
    ParamLookup, ParamTypes,
};
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub formulas: Vec<Formula>,
    #[serde(default)]
    pub param_types: ParamTypes,
}

impl RuleSet {
    pub fn new(formulas: Vec<Formula>, param_types: ParamTypes) -> Self {
        RuleSet {
            formulas,
            param_types,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, FormatError> {
        let rules: RuleSet = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn to_json_string(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Tokenizes the enabled formulas once for repeated evaluation.
    pub fn compile(&self) -> Result<Vec<CompiledFormula>, FormatError> {
        Ok(compile_formulas(&self.formulas, &self.param_types)?)
    }

    /// Evaluates the rule set against `rows`.
    pub fn evaluate<P: ParamLookup>(&self, rows: &[P]) -> Result<CalculationOutcome, FormatError> {
        let compiled = self.compile()?;
        Ok(calculate_compiled(&compiled, rows)?)
    }

    /// Formula names must be unique, otherwise their verdicts would
    /// overwrite each other in a row's result map.
    fn validate(&self) -> Result<(), FormatError> {
        let mut seen = std::collections::HashSet::new();
        for formula in &self.formulas {
            if !seen.insert(formula.name.as_str()) {
                return Err(FormatError::InvalidFormat(format!(
                    "duplicate formula name '{}'",
                    formula.name
                )));
            }
        }
        Ok(())
    }
}

/// Loads a rule set from a JSON file.
pub fn load_rule_set(path: &Path) -> Result<RuleSet, FormatError> {
    let json = fs::read_to_string(path)?;
    let rules = RuleSet::from_json_str(&json)?;
    log_info!(
        "FORMAT",
        "loaded {} formulas and {} parameter types from {}",
        rules.formulas.len(),
        rules.param_types.len(),
        path.display()
    );
    Ok(rules)
}

/// Saves a rule set as pretty-printed JSON.
pub fn save_rule_set(rules: &RuleSet, path: &Path) -> Result<(), FormatError> {
    fs::write(path, rules.to_json_string()?)?;
    Ok(())
}
