//! Commerce API product records
//!
//! Shape of a product as exported by the storefront's REST API, and its
//! normalization into the catalog [`Product`] record.

use segment_core::types::parse_number;
use segment_core::{Numeric, Product};
use serde::{Deserialize, Serialize};

/// Named reference (category or tag) in a commerce record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

/// Product as returned by the commerce API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommerceProduct {
    pub id: i64,
    pub name: String,
    /// Decimal price as text, possibly empty
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub stock_status: String,
    #[serde(default)]
    pub stock_quantity: Option<f64>,
    #[serde(default)]
    pub categories: Option<Vec<NamedRef>>,
    #[serde(default)]
    pub tags: Option<Vec<NamedRef>>,
    #[serde(default)]
    pub on_sale: Option<bool>,
    #[serde(default)]
    pub date_created: Option<String>,
}

impl From<CommerceProduct> for Product {
    fn from(p: CommerceProduct) -> Self {
        let price = p.price.as_deref().and_then(parse_number).unwrap_or(0.0);
        let category = p
            .categories
            .and_then(|categories| categories.into_iter().next())
            .map(|c| c.name);
        let tags = p
            .tags
            .unwrap_or_default()
            .into_iter()
            .map(|t| t.name)
            .collect();

        Product {
            id: p.id,
            title: p.name,
            price: Numeric::Number(price),
            stock_status: p.stock_status,
            stock_quantity: Some(Numeric::Number(p.stock_quantity.unwrap_or(0.0))),
            category,
            tags,
            on_sale: p.on_sale.unwrap_or(false),
            date_created: p.date_created,
        }
    }
}

/// Normalize a batch of commerce records
pub fn normalize(products: Vec<CommerceProduct>) -> Vec<Product> {
    products.into_iter().map(Product::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_full_record() {
        let record: CommerceProduct = serde_json::from_value(serde_json::json!({
            "id": 42,
            "name": "Alpine Parka",
            "price": "249.00",
            "stock_status": "instock",
            "stock_quantity": 7,
            "categories": [{"name": "Jackets"}, {"name": "Outdoor"}],
            "tags": [{"name": "Winter"}],
            "on_sale": true,
            "date_created": "2024-01-10T09:00:00",
            "average_rating": "4.50"
        }))
        .unwrap();

        let product = Product::from(record);
        assert_eq!(product.title, "Alpine Parka");
        assert_eq!(product.price, Numeric::Number(249.0));
        assert_eq!(product.stock_quantity, Some(Numeric::Number(7.0)));
        assert_eq!(product.category.as_deref(), Some("Jackets"));
        assert_eq!(product.tags, vec!["Winter".to_string()]);
        assert!(product.on_sale);
        assert_eq!(product.date_created.as_deref(), Some("2024-01-10T09:00:00"));
    }

    #[test]
    fn test_normalize_sparse_record() {
        let record: CommerceProduct = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Gift Card",
            "price": "",
            "stock_status": "instock",
            "stock_quantity": null,
            "categories": [],
            "tags": []
        }))
        .unwrap();

        let product = Product::from(record);
        assert_eq!(product.price, Numeric::Number(0.0));
        assert_eq!(product.stock_quantity, Some(Numeric::Number(0.0)));
        assert_eq!(product.category, None);
        assert!(product.tags.is_empty());
        assert!(!product.on_sale);
    }
}
