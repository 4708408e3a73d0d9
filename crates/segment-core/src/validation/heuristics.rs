//! Glued-condition heuristics
//!
//! Authors sometimes forget the newline between two conditions and write
//! `price > 90category = Jackets`. The tolerant tokenizer then sees a single condition
//! whose value is `90category = Jackets`. These predicates look at the raw value and
//! flag the two shapes this mistake takes. They are pattern matches on author mistakes,
//! not grammar.
//!
//! When both fire, the field-name message is reported.

use crate::operator::Operator;
use crate::types::FieldRegistry;

pub const VALUE_CONTAINS_OPERATOR: &str =
    "Value contains an operator. Did you forget a newline between conditions?";

pub const VALUE_STARTS_WITH_FIELD: &str =
    "Value starts with a field name. Did you forget a newline between conditions?";

/// True when any operator symbol occurs anywhere in the value
pub fn contains_operator(value: &str) -> bool {
    Operator::ALL.iter().any(|op| value.contains(op.symbol()))
}

/// True when the first word of the value is a registered field name, either on its
/// own (`category Jackets`) or glued to a leading number (`90category`)
pub fn starts_with_field_name(value: &str, registry: &FieldRegistry) -> bool {
    let Some(word) = value.split_whitespace().next() else {
        return false;
    };

    if registry.contains(word) {
        return true;
    }

    let rest = word.trim_start_matches(|c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'));
    rest.len() < word.len() && !rest.is_empty() && registry.contains(rest)
}

/// Run the heuristics and return the message of the first one that fires
pub fn glued_condition(value: &str, registry: &FieldRegistry) -> Option<&'static str> {
    if starts_with_field_name(value, registry) {
        Some(VALUE_STARTS_WITH_FIELD)
    } else if contains_operator(value) {
        Some(VALUE_CONTAINS_OPERATOR)
    } else {
        None
    }
}
