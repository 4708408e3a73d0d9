//! Product catalog records
//!
//! Products are owned by the catalog storage; the engine only reads them.
//! Numeric columns may arrive as JSON numbers or as numeric text, so they are kept
//! in a [`Numeric`] wrapper and coerced at evaluation time.

use super::value::parse_number;
use serde::{Deserialize, Deserializer, Serialize};

/// A numeric column that may be stored as a number or as text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    /// Coerce to a real number; `None` when the stored text is not numeric
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Numeric::Number(n) => Some(*n),
            Numeric::Text(s) => parse_number(s),
        }
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Number(value)
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Number(value as f64)
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Numeric::Text(value.to_string())
    }
}

/// Catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: Numeric,
    pub stock_status: String,
    #[serde(default)]
    pub stock_quantity: Option<Numeric>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default)]
    pub date_created: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    /// Create a product with the required columns; everything else starts empty
    pub fn new(id: i64, title: impl Into<String>, price: impl Into<Numeric>) -> Self {
        Self {
            id,
            title: title.into(),
            price: price.into(),
            stock_status: "instock".to_string(),
            stock_quantity: None,
            category: None,
            tags: Vec::new(),
            on_sale: false,
            date_created: None,
        }
    }

    pub fn with_stock_status(mut self, status: impl Into<String>) -> Self {
        self.stock_status = status.into();
        self
    }

    pub fn with_stock_quantity(mut self, quantity: impl Into<Numeric>) -> Self {
        self.stock_quantity = Some(quantity.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn on_sale(mut self, on_sale: bool) -> Self {
        self.on_sale = on_sale;
        self
    }

    pub fn with_date_created(mut self, date: impl Into<String>) -> Self {
        self.date_created = Some(date.into());
        self
    }
}
