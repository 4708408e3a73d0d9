//! Error types for Segment Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Unknown operator: \"{0}\"")]
    UnknownOperator(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_operator_display() {
        let err = CoreError::UnknownOperator("==".to_string());
        assert_eq!(err.to_string(), "Unknown operator: \"==\"");
    }
}
