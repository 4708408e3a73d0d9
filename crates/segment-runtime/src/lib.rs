//! Segment Runtime - condition evaluation
//!
//! Resolves product fields, coerces condition literals to the same representation
//! and applies operators. Evaluation is synchronous and holds no shared state.

pub mod error;
pub mod evaluator;

mod field_lookup;
mod operators;

pub use error::{EvaluationError, Result};
pub use evaluator::Evaluator;
