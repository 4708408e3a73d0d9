//! Segment evaluator
//!
//! Applies conditions to products. A product belongs to a segment when every
//! condition holds for it. Single-condition evaluation reports failures as
//! [`EvaluationError`]; bulk filtering treats a failure as "does not match" so one
//! bad record never stops the rest of the catalog from being filtered.

use crate::error::{EvaluationError, Result};
use crate::field_lookup;
use crate::operators;
use segment_core::{Condition, FieldRegistry, Operator, Product};

/// Condition evaluator over a field registry
#[derive(Debug, Clone)]
pub struct Evaluator {
    registry: FieldRegistry,
}

impl Evaluator {
    /// Evaluator over the catalog registry (standard fields plus `id` and `tags`)
    pub fn new() -> Self {
        Self::with_registry(FieldRegistry::catalog().clone())
    }

    pub fn with_registry(registry: FieldRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Evaluate one condition against one product
    pub fn evaluate(&self, product: &Product, condition: &Condition) -> Result<bool> {
        let spec = self
            .registry
            .get(&condition.field)
            .ok_or_else(|| EvaluationError::UnknownField(condition.field.clone()))?;

        let left = field_lookup::resolve(product, spec)?;
        let right = operators::coerce_literal(spec, &condition.value)?;
        operators::apply(spec, &left, condition.operator, &right)
    }

    /// Evaluate raw `field`, `operator` and `value` text without prior parsing
    pub fn evaluate_parts(
        &self,
        product: &Product,
        field: &str,
        operator: &str,
        value: &str,
    ) -> Result<bool> {
        let operator: Operator = operator
            .trim()
            .parse()
            .map_err(|_| EvaluationError::UnknownOperator(operator.to_string()))?;
        self.evaluate(product, &Condition::new(field, operator, value))
    }

    /// True when every condition holds; failures count as non-matches
    pub fn matches(&self, product: &Product, conditions: &[Condition]) -> bool {
        conditions
            .iter()
            .all(|condition| match self.evaluate(product, condition) {
                Ok(matched) => matched,
                Err(e) => {
                    tracing::warn!(
                        "Error evaluating condition '{}' for product {}: {}",
                        condition,
                        product.id,
                        e
                    );
                    false
                }
            })
    }

    /// Products matching all conditions, in catalog order
    pub fn filter<'a>(&self, conditions: &[Condition], products: &'a [Product]) -> Vec<&'a Product> {
        let matched: Vec<&Product> = products
            .iter()
            .filter(|product| self.matches(product, conditions))
            .collect();

        tracing::debug!(
            "{} of {} products matched {} conditions",
            matched.len(),
            products.len(),
            conditions.len()
        );
        matched
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
