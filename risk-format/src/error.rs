//! FILENAME: risk-format/src/error.rs

use risk_engine::CalculateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("Calculation failed: {0}")]
    Calculate(#[from] CalculateError),
}
