//! Condition types produced by the parser

use crate::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed condition line, e.g. `price > 50`
///
/// The field is always lowercase and the value is trimmed. A condition has no
/// identity beyond its triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Field name (lowercase)
    pub field: String,
    /// Comparison operator
    pub operator: Operator,
    /// Literal to compare against, as written
    pub value: String,
}

impl Condition {
    /// Create a new condition, canonicalizing the field name and trimming the value
    pub fn new(field: impl AsRef<str>, operator: Operator, value: impl AsRef<str>) -> Self {
        Self {
            field: field.as_ref().trim().to_lowercase(),
            operator,
            value: value.as_ref().trim().to_string(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.value)
    }
}

/// Raw whitespace tokens of a condition line, before the operator is checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTokens {
    /// First token, lowercased
    pub field: String,
    /// Second token, verbatim
    pub operator: String,
    /// Remaining tokens joined by single spaces
    pub value: String,
}
