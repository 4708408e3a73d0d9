//! Literal coercion and operator application

use crate::error::{EvaluationError, Result};
use segment_core::types::parse_number;
use segment_core::{FieldKind, FieldSpec, Operator, Value};

/// Coerce a condition literal to the representation of `spec`'s kind
pub(crate) fn coerce_literal(spec: &FieldSpec, literal: &str) -> Result<Value> {
    match spec.kind {
        FieldKind::Numeric => parse_number(literal).map(Value::Number).ok_or_else(|| {
            EvaluationError::InvalidNumericLiteral {
                field: spec.name.clone(),
                value: literal.to_string(),
            }
        }),
        FieldKind::Boolean => Ok(Value::Bool(literal.trim().eq_ignore_ascii_case("true"))),
        FieldKind::Text | FieldKind::List => Ok(Value::Text(
            literal
                .to_lowercase()
                .chars()
                .filter(|c| !matches!(c, '\'' | '"'))
                .collect(),
        )),
    }
}

/// Apply `op` between a resolved product value and a coerced literal
pub(crate) fn apply(spec: &FieldSpec, left: &Value, op: Operator, right: &Value) -> Result<bool> {
    if let Value::List(items) = left {
        let Value::Text(needle) = right else {
            return Ok(false);
        };
        return match op {
            Operator::Eq => Ok(items.contains(needle)),
            Operator::Ne => Ok(!items.contains(needle)),
            _ => Err(EvaluationError::UnsupportedOperator {
                operator: op,
                field: spec.name.clone(),
            }),
        };
    }

    if op.is_comparison() && !spec.is_numeric() {
        return Err(EvaluationError::OperatorFieldMismatch {
            operator: op,
            field: spec.name.clone(),
        });
    }

    // An absent number orders as zero but is never equal to a literal
    let zero = Value::Number(0.0);
    let ordered = match left {
        Value::Null => &zero,
        other => other,
    };

    match (ordered, op, right) {
        (_, Operator::Eq, _) => Ok(left == right),
        (_, Operator::Ne, _) => Ok(left != right),
        (Value::Number(l), Operator::Gt, Value::Number(r)) => Ok(l > r),
        (Value::Number(l), Operator::Lt, Value::Number(r)) => Ok(l < r),
        (Value::Number(l), Operator::Ge, Value::Number(r)) => Ok(l >= r),
        (Value::Number(l), Operator::Le, Value::Number(r)) => Ok(l <= r),
        _ => {
            tracing::debug!(
                "Cannot order {} and {} for {}",
                left.type_name(),
                right.type_name(),
                spec.name
            );
            Ok(false)
        }
    }
}
