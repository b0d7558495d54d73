//! FILENAME: risk-format/src/rows.rs
//! PURPOSE: Reads parameter rows from JSON documents.
//! CONTEXT: A document is either one object (one row) or an array of
//! objects (one row each). Every member becomes `name -> raw JSON text`:
//! `2000000`, `false` and `"abc"` (quotes included) are stored as written,
//! and the evaluator casts them only when an operator needs them.
//! A `null` member counts as absent.

use std::fs;
use std::path::Path;

use risk_engine::{log_debug, ParamRow};
use serde_json::{Map, Value};

use crate::error::FormatError;

/// Parses a JSON document into parameter rows.
pub fn parse_rows(json: &str) -> Result<Vec<ParamRow>, FormatError> {
    let document: Value = serde_json::from_str(json)?;

    let rows = match document {
        Value::Object(members) => vec![object_to_row(members)],
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(members) => Ok(object_to_row(members)),
                other => Err(FormatError::InvalidFormat(format!(
                    "row {} is {}, expected an object",
                    index,
                    kind_of(&other)
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?,
        other => {
            return Err(FormatError::InvalidFormat(format!(
                "expected an object or an array of objects, found {}",
                kind_of(&other)
            )))
        }
    };

    log_debug!("FORMAT", "parsed {} parameter rows", rows.len());
    Ok(rows)
}

/// Loads parameter rows from a JSON file.
pub fn load_rows(path: &Path) -> Result<Vec<ParamRow>, FormatError> {
    let json = fs::read_to_string(path)?;
    parse_rows(&json)
}

fn object_to_row(members: Map<String, Value>) -> ParamRow {
    members
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(name, value)| (name, value.to_string()))
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
