//! Segment Core - Core types and definitions for the product segment engine
//!
//! This crate provides the fundamental pieces shared by every other crate:
//! - Operators and the field registry (which fields exist and how they compare)
//! - Product records and runtime values
//! - Condition parsing in its two modes (tolerant editor parsing, strict execution parsing)
//! - Line-by-line validation with diagnostics for the editor
//! - Error types

pub mod condition;
pub mod error;
pub mod operator;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use condition::{Condition, ConditionParser, LineTokens, ParseError, ParseMode};
pub use error::CoreError;
pub use operator::Operator;
pub use types::{FieldKind, FieldRegistry, FieldSpec, Numeric, Product, Value};
pub use validation::{ValidationError, ValidationReport, Validator, ValidatorOptions};
