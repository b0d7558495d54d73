//! FILENAME: parser/src/params.rs
//! PURPOSE: Parameter lookup seam between the formula pipeline and the data rows.
//! CONTEXT: A parameter row maps identifier names to their raw textual values.
//! The grammar parser asks it whether a name exists (for `exists(x)`) and the
//! evaluator asks it for the raw text of identifiers. Neither knows where the
//! values came from.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::token::ValueType;

/// Declared value type per identifier name.
pub type ParamTypes = FxHashMap<String, ValueType>;

/// Read-only view of one data row.
pub trait ParamLookup {
    /// Raw text of `name`, or `None` when the row does not carry it.
    fn lookup(&self, name: &str) -> Option<&str>;

    fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

impl<T: ParamLookup + ?Sized> ParamLookup for &T {
    fn lookup(&self, name: &str) -> Option<&str> {
        (**self).lookup(name)
    }
}

impl<S: BuildHasher> ParamLookup for HashMap<String, String, S> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl ParamLookup for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// A row with no parameters at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyParams;

impl ParamLookup for EmptyParams {
    fn lookup(&self, _name: &str) -> Option<&str> {
        None
    }
}

/// Owned parameter row: name --> raw text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamRow {
    values: FxHashMap<String, String>,
}

impl ParamRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw text for `name`, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, raw: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), raw.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.insert(name, raw);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl ParamLookup for ParamRow {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ParamRow {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
