//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for risk engine integration tests.

#![allow(dead_code)]

use risk_engine::{
    calculate, CalculateError, CalculationOutcome, Color, Formula, ParamRow, ParamTypes,
    ValueType, Verdict,
};

/// Test harness holding a declared type table and a set of parameter rows.
pub struct TestHarness {
    pub types: ParamTypes,
    pub rows: Vec<ParamRow>,
}

impl TestHarness {
    /// A harness with no declared types and no rows.
    pub fn new() -> Self {
        TestHarness {
            types: ParamTypes::default(),
            rows: Vec::new(),
        }
    }

    /// One company record with all four known parameters.
    pub fn with_single_row() -> Self {
        TestHarness {
            types: sample_types(),
            rows: vec![ParamRow::new()
                .with("s2001", "2000000")
                .with("s6004", "10")
                .with("stated_capital", "50")
                .with("bool_param", "false")],
        }
    }

    /// Three records sharing `stated_capital` and `bool_param`.
    /// The first record has no `s6004`.
    pub fn with_multiple_rows() -> Self {
        let shared = || {
            ParamRow::new()
                .with("stated_capital", "50")
                .with("bool_param", "false")
        };

        TestHarness {
            types: sample_types(),
            rows: vec![
                shared().with("s2001", "10"),
                shared().with("s2001", "0").with("s6004", "10"),
                shared().with("s2001", "-10").with("s6004", "10"),
            ],
        }
    }

    pub fn run(&self, formulas: &[Formula]) -> Result<CalculationOutcome, CalculateError> {
        calculate(formulas, &self.rows, &self.types)
    }
}

pub fn sample_types() -> ParamTypes {
    let mut types = ParamTypes::default();
    types.insert("s2001".to_string(), ValueType::Number);
    types.insert("s6004".to_string(), ValueType::Number);
    types.insert("stated_capital".to_string(), ValueType::Number);
    types.insert("bool_param".to_string(), ValueType::Bool);
    types
}

pub fn level_types() -> ParamTypes {
    let mut types = ParamTypes::default();
    types.insert("level".to_string(), ValueType::Number);
    types
}

pub fn verdict(version: i64, color: Color, result: bool) -> Verdict {
    Verdict {
        version,
        color,
        result,
    }
}

/// Asserts that a batch failed the way every hard failure must.
pub fn assert_aborted(result: Result<CalculationOutcome, CalculateError>) -> CalculateError {
    match result {
        Ok(outcome) => panic!("expected failure, got {:?}", outcome),
        Err(err) => {
            assert_eq!(err.color(), Color::Black);
            err
        }
    }
}
