//! SDK error types

use segment_core::{ParseError, ValidationError};
use segment_repository::RepositoryError;
use segment_runtime::EvaluationError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Condition text could not be parsed
    #[error("{0}")]
    ParseError(#[from] ParseError),

    /// Condition could not be evaluated
    #[error("Evaluation error: {0}")]
    EvaluationError(#[from] EvaluationError),

    /// Catalog could not be loaded or stored
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),

    /// Text held no conditions
    #[error("No valid conditions found")]
    NoConditions,
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

/// Why the editor pre-flight refused to evaluate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreflightError {
    /// Nothing but whitespace was entered
    #[error("Please enter at least one condition")]
    Empty,

    /// At least one line failed validation
    #[error("{}", invalid_summary(.0))]
    Invalid(Vec<ValidationError>),
}

fn invalid_summary(errors: &[ValidationError]) -> String {
    format!(
        "Found {} validation error{}. Please fix them before evaluating.",
        errors.len(),
        if errors.len() == 1 { "" } else { "s" }
    )
}
