//! SegmentEngine - the high-level API
//!
//! Ties the validator, the strict parser, the evaluator and the catalog together.
//! The engine keeps an in-memory snapshot of the catalog; [`SegmentEngine::reload`]
//! and [`SegmentEngine::sync`] refresh it from the repository.

use std::sync::Arc;

use segment_core::{
    Condition, ConditionParser, Product, ValidationError, ValidationReport, Validator,
};
use segment_repository::{commerce, CommerceProduct, WritableProductRepository};
use segment_runtime::Evaluator;

use crate::config::EngineConfig;
use crate::error::{PreflightError, Result, SdkError};
use crate::types::{ProductListResponse, SegmentResponse, SyncResponse};

/// Segment engine
pub struct SegmentEngine {
    config: EngineConfig,
    validator: Validator,
    evaluator: Evaluator,
    repository: Arc<dyn WritableProductRepository>,
    products: Vec<Product>,
}

impl SegmentEngine {
    pub(crate) fn new(
        config: EngineConfig,
        validator: Validator,
        evaluator: Evaluator,
        repository: Arc<dyn WritableProductRepository>,
        products: Vec<Product>,
    ) -> Self {
        Self {
            config,
            validator,
            evaluator,
            repository,
            products,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Current catalog snapshot
    pub fn catalog(&self) -> &[Product] {
        &self.products
    }

    /// Editor validation: every bad line, plus advisory warnings
    pub fn validate(&self, text: &str) -> ValidationReport {
        self.validator.validate_report(text)
    }

    /// Editor pre-flight.
    ///
    /// Blank input and any hard validation error block evaluation; warnings do not.
    /// On success returns the conditions as the tolerant parser reads them.
    pub fn preflight(&self, text: &str) -> std::result::Result<Vec<Condition>, PreflightError> {
        if text.trim().is_empty() {
            return Err(PreflightError::Empty);
        }

        let report = self.validate(text);
        if !report.is_valid() {
            return Err(PreflightError::Invalid(report.errors));
        }

        let parser = ConditionParser::tolerant();
        let mut conditions = Vec::new();
        for (index, line) in text.split('\n').enumerate() {
            match parser.parse_line(line) {
                Ok(Some(condition)) => conditions.push(condition),
                Ok(None) => {}
                Err(e) => {
                    return Err(PreflightError::Invalid(vec![ValidationError {
                        line: index + 1,
                        message: e.message,
                        text: e.condition,
                    }]))
                }
            }
        }
        Ok(conditions)
    }

    /// Parse `text` strictly and filter the catalog.
    ///
    /// Fails on the first malformed line, or when no line holds a condition.
    pub fn try_evaluate(&self, text: &str) -> Result<(Vec<Condition>, Vec<Product>)> {
        let conditions = ConditionParser::strict().parse_text(text)?;
        tracing::info!("Parsed {} conditions", conditions.len());

        if conditions.is_empty() {
            return Err(SdkError::NoConditions);
        }

        tracing::info!(
            "Evaluating {} products against conditions",
            self.products.len()
        );
        let products = self.filter(&conditions);
        tracing::info!("{} products matched the conditions", products.len());

        Ok((conditions, products))
    }

    /// Server-side evaluation, reported as an envelope
    pub fn evaluate(&self, text: &str) -> SegmentResponse {
        match self.try_evaluate(text) {
            Ok((conditions, products)) => SegmentResponse::matched(conditions, products),
            Err(e) => {
                tracing::warn!("Evaluation error: {}", e);
                SegmentResponse::failure(e.to_string())
            }
        }
    }

    /// Products matching every condition, in catalog order
    pub fn filter(&self, conditions: &[Condition]) -> Vec<Product> {
        self.evaluator
            .filter(conditions, &self.products)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Catalog listing
    pub fn products(&self) -> ProductListResponse {
        ProductListResponse {
            success: true,
            count: self.products.len(),
            products: self.products.clone(),
        }
    }

    /// Re-read the catalog from the repository; returns the new product count
    pub async fn reload(&mut self) -> Result<usize> {
        self.products = self.repository.load_products().await?;
        tracing::info!("Reloaded catalog: {} products", self.products.len());
        Ok(self.products.len())
    }

    /// Normalize commerce records, upsert them by id and refresh the snapshot
    pub async fn sync(&mut self, records: Vec<CommerceProduct>) -> Result<SyncResponse> {
        let products = commerce::normalize(records);
        tracing::info!("Syncing {} products", products.len());

        let synced = self.repository.upsert_products(products.clone()).await?;
        self.reload().await?;

        Ok(SyncResponse {
            success: true,
            synced,
            products,
        })
    }
}
