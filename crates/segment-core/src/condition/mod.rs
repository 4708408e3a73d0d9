//! Condition Parsing Module
//!
//! A segment is written as one condition per line:
//!
//! ```text
//! price > 50
//! category = Jackets
//! stock_status = instock
//! on_sale = true
//! ```
//!
//! Every line is `field operator value`. All lines must hold for a product to
//! belong to the segment.
//!
//! ## Supported Operators
//! - `=` (equal)
//! - `!=` (not equal)
//! - `>` (greater than)
//! - `<` (less than)
//! - `>=` (greater than or equal)
//! - `<=` (less than or equal)

mod parser;
mod types;

pub use parser::{ConditionParser, ParseError, ParseMode, INVALID_FORMAT, STRICT_PATTERN};
pub use types::{Condition, LineTokens};
