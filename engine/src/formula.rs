//! FILENAME: engine/src/formula.rs
//! PURPOSE: Formula definitions, severity colors and per-row results.
//! CONTEXT: A formula is a named, versioned, colored boolean expression.
//! Batch evaluation produces one `FormulaResult` per parameter row and an
//! aggregate color: the highest-ranked color among the formulas that were
//! true on any row.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Ranked severity label. Variant order is the ranking:
/// `Black < Grey < Green < Yellow < Red`.
///
/// `Black` only marks a failed batch and is never a formula color.
/// `Grey` is the aggregate when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Grey,
    Green,
    Yellow,
    Red,
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Black => "black",
            Color::Grey => "grey",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Red => "red",
        };
        write!(f, "{}", name)
    }
}

/// A risk formula as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formula {
    pub name: String,
    pub expression: String,
    pub color: Color,
    #[serde(default)]
    pub version: i64,
    #[serde(default = "enabled_by_default", alias = "is_enable")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl Formula {
    /// An enabled formula at version 0.
    pub fn new(name: impl Into<String>, expression: impl Into<String>, color: Color) -> Self {
        Formula {
            name: name.into(),
            expression: expression.into(),
            color,
            version: 0,
            enabled: true,
        }
    }

    pub fn with_version(mut self, version: i64) -> Self {
        self.version = version;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Outcome of one formula on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub version: i64,
    pub color: Color,
    pub result: bool,
}

/// Verdicts of one row, keyed by formula name.
pub type FormulaResult = FxHashMap<String, Verdict>;

/// Result of a successful batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutcome {
    pub color: Color,
    /// One entry per row that produced at least one verdict, in row order.
    pub results: Vec<FormulaResult>,
}
