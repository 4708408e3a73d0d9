//! Type system for segment conditions
//!
//! This module contains:
//! - Runtime values
//! - The field registry (schema)
//! - Product records

pub mod product;
pub mod schema;
pub mod value;

pub use product::{Numeric, Product};
pub use schema::{FieldKind, FieldRegistry, FieldSpec, STOCK_STATUS_VALUES};
pub use value::{parse_number, Value};
