//! Evaluation error types

use segment_core::Operator;
use thiserror::Error;

/// Failure while evaluating one condition against one product
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// Condition references a field the evaluator does not know
    #[error("Unknown field: \"{0}\"")]
    UnknownField(String),

    /// Operator text is not one of `= != > < >= <=`
    #[error("Unknown operator: \"{0}\"")]
    UnknownOperator(String),

    /// Literal for a numeric field is not a number
    #[error("Invalid numeric value for {field}: \"{value}\"")]
    InvalidNumericLiteral { field: String, value: String },

    /// Ordering operator applied to a non-numeric field
    #[error("Operator \"{operator}\" requires a numeric field, got {field}")]
    OperatorFieldMismatch { operator: Operator, field: String },

    /// Operator not supported for a list field
    #[error("Operator \"{operator}\" not supported for {field} field")]
    UnsupportedOperator { operator: Operator, field: String },

    /// Stored value cannot be coerced to the field's kind
    #[error("Product {product_id} has an invalid {field} value")]
    InvalidStoredValue { field: String, product_id: i64 },
}

/// Result type for evaluation
pub type Result<T> = std::result::Result<T, EvaluationError>;
