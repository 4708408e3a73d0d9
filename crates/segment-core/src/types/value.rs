//! Runtime value types for condition evaluation
//!
//! The `Value` enum is the comparable representation a product field is resolved to,
//! and that a condition literal is coerced to, before an operator is applied.

use serde::{Deserialize, Serialize};

/// Runtime value type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value
    Null,
    /// Boolean value
    Bool(bool),
    /// Number value (f64 handles both int and float)
    Number(f64),
    /// Text value
    Text(String),
    /// List of text values
    List(Vec<String>),
}

impl Value {
    /// Get the type name of a value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::List(_) => "list",
        }
    }
}

/// Parse a literal as a finite real number.
///
/// Surrounding whitespace is ignored; `inf`, `NaN` and partially numeric text
/// such as `90category` are rejected.
pub fn parse_number(literal: &str) -> Option<f64> {
    literal
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}
