//! Field Lookup
//!
//! Resolves a product field to the comparable [`Value`] for its kind. Text is
//! lowercased here so that comparisons are case-insensitive on both sides.

use crate::error::{EvaluationError, Result};
use segment_core::{FieldSpec, Product, Value};

/// Resolve `spec` on `product`.
///
/// Absent `category` resolves to the empty string; absent `stock_quantity` resolves
/// to [`Value::Null`].
pub(crate) fn resolve(product: &Product, spec: &FieldSpec) -> Result<Value> {
    let value = match spec.name.as_str() {
        "id" => Value::Number(product.id as f64),
        "title" => Value::Text(product.title.to_lowercase()),
        "price" => Value::Number(product.price.to_f64().ok_or_else(|| {
            EvaluationError::InvalidStoredValue {
                field: spec.name.clone(),
                product_id: product.id,
            }
        })?),
        "stock_status" => Value::Text(product.stock_status.to_lowercase()),
        "stock_quantity" => match &product.stock_quantity {
            None => Value::Null,
            Some(stored) => Value::Number(stored.to_f64().ok_or_else(|| {
                EvaluationError::InvalidStoredValue {
                    field: spec.name.clone(),
                    product_id: product.id,
                }
            })?),
        },
        "category" => Value::Text(
            product
                .category
                .as_deref()
                .unwrap_or_default()
                .to_lowercase(),
        ),
        "on_sale" => Value::Bool(product.on_sale),
        "tags" => Value::List(product.tags.iter().map(|t| t.to_lowercase()).collect()),
        other => {
            tracing::debug!("Field {} is registered but not stored on products", other);
            return Err(EvaluationError::UnknownField(other.to_string()));
        }
    };
    Ok(value)
}
