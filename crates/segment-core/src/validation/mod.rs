//! Segment text validation
//!
//! The validator gives editor feedback for a whole block of condition text in one pass:
//! every malformed line gets exactly one diagnostic, and a bad line never stops the
//! lines after it from being checked.
//!
//! Per line, checks run in a fixed order and the first failing check wins:
//!
//! 1. structure (`field operator value`)
//! 2. known field
//! 3. known operator
//! 4. non-empty value
//! 5. operator allowed for the field kind
//! 6. glued-condition heuristics (see [`heuristics`])
//! 7. numeric value (and non-negative where required)
//! 8. boolean value
//! 9. suggested values (advisory unless [`ValidatorOptions::strict_suggested_values`])
//!
//! # Example
//!
//! ```rust
//! use segment_core::Validator;
//!
//! let errors = Validator::new().validate("price > 50\ncost > 10");
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].line, 2);
//! ```

pub mod heuristics;

use crate::condition::{ConditionParser, INVALID_FORMAT};
use crate::operator::Operator;
use crate::types::{parse_number, FieldRegistry};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A diagnostic for one input line
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("Line {line}: {message}")]
pub struct ValidationError {
    /// 1-based line number
    pub line: usize,
    /// Human-readable message
    pub message: String,
    /// The offending line, trimmed
    pub text: String,
}

/// Result of validating a block of text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Problems that block evaluation
    pub errors: Vec<ValidationError>,
    /// Advisory notes that do not block evaluation
    pub warnings: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validator options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorOptions {
    /// Treat values outside a field's suggested set as errors instead of warnings
    #[serde(default)]
    pub strict_suggested_values: bool,
}

/// Outcome of checking a single line
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineCheck {
    Ok,
    Error(String),
    Advisory(String),
}

/// Line-oriented validator for segment text
#[derive(Debug, Clone)]
pub struct Validator {
    registry: FieldRegistry,
    options: ValidatorOptions,
}

impl Validator {
    /// Create a validator over the standard field registry
    pub fn new() -> Self {
        Self::with_registry(FieldRegistry::standard().clone())
    }

    /// Create a validator over a custom registry
    pub fn with_registry(registry: FieldRegistry) -> Self {
        Self {
            registry,
            options: ValidatorOptions::default(),
        }
    }

    /// Set validator options
    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn options(&self) -> ValidatorOptions {
        self.options
    }

    /// Validate text and return the blocking errors, in line order
    pub fn validate(&self, text: &str) -> Vec<ValidationError> {
        self.validate_report(text).errors
    }

    /// Validate text and return errors and advisory warnings
    pub fn validate_report(&self, text: &str) -> ValidationReport {
        let mut report = ValidationReport::default();

        for (index, line) in text.split('\n').enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let diagnostic = |message: String| ValidationError {
                line: index + 1,
                message,
                text: trimmed.to_string(),
            };

            match self.check_line(trimmed) {
                LineCheck::Ok => {}
                LineCheck::Error(message) => report.errors.push(diagnostic(message)),
                LineCheck::Advisory(message) if self.options.strict_suggested_values => {
                    report.errors.push(diagnostic(message))
                }
                LineCheck::Advisory(message) => report.warnings.push(diagnostic(message)),
            }
        }

        report
    }

    fn check_line(&self, line: &str) -> LineCheck {
        let tokens = match ConditionParser::tokenize(line) {
            Ok(Some(tokens)) => tokens,
            Ok(None) => return LineCheck::Ok,
            Err(_) => return LineCheck::Error(INVALID_FORMAT.to_string()),
        };

        let Some(spec) = self.registry.get(&tokens.field) else {
            return LineCheck::Error(format!(
                "Invalid field '{}'. Valid fields: {}",
                tokens.field,
                self.registry.field_list()
            ));
        };

        let Ok(operator) = tokens.operator.parse::<Operator>() else {
            return LineCheck::Error(format!(
                "Invalid operator '{}'. Valid operators: {}",
                tokens.operator,
                Operator::symbol_list()
            ));
        };

        let value = tokens.value.trim();
        if value.is_empty() {
            return LineCheck::Error("Value cannot be empty".to_string());
        }

        if !spec.kind.allows(operator) {
            return LineCheck::Error(if spec.is_boolean() {
                boolean_comparison_message(&spec.name)
            } else {
                format!(
                    "Comparison operator '{}' can only be used with numeric fields ({})",
                    operator,
                    self.registry.numeric_field_list()
                )
            });
        }

        if let Some(message) = heuristics::glued_condition(value, &self.registry) {
            return LineCheck::Error(message.to_string());
        }

        if spec.is_numeric() {
            let Some(number) = parse_number(value) else {
                return LineCheck::Error(format!(
                    "Field '{}' requires a numeric value, got '{}'",
                    spec.name, value
                ));
            };
            if spec.non_negative && number < 0.0 {
                return LineCheck::Error(format!("{} cannot be negative", spec.name));
            }
        }

        if spec.is_boolean() {
            let lower = value.to_lowercase();
            if lower != "true" && lower != "false" {
                return LineCheck::Error(format!(
                    "Field '{}' requires a boolean value (true/false), got '{}'",
                    spec.name, value
                ));
            }
        }

        if operator == Operator::Eq
            && !spec.suggested_values.is_empty()
            && !spec.suggested_values.contains(&value.to_lowercase())
        {
            return LineCheck::Advisory(format!(
                "Consider using one of: {} for {}",
                spec.suggested_values.join(", "),
                spec.name
            ));
        }

        LineCheck::Ok
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

fn boolean_comparison_message(field: &str) -> String {
    format!(
        "Boolean field '{}' cannot use comparison operators. Use = or != only",
        field
    )
}
