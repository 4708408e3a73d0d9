//! Field registry
//!
//! The registry is the static table describing which product fields a condition may
//! reference, what kind of value each holds, and therefore which operators apply.
//! It is built once and shared; callers that need a different schema build their own
//! [`FieldRegistry`] and hand it to the validator or evaluator.

use crate::operator::Operator;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Values suggested for the `stock_status` field
pub const STOCK_STATUS_VALUES: [&str; 3] = ["instock", "outofstock", "onbackorder"];

static STANDARD: LazyLock<FieldRegistry> = LazyLock::new(|| {
    FieldRegistry::new()
        .add_field(FieldSpec::new("title", FieldKind::Text))
        .add_field(FieldSpec::new("price", FieldKind::Numeric))
        .add_field(
            FieldSpec::new("stock_status", FieldKind::Text)
                .with_suggested_values(&STOCK_STATUS_VALUES),
        )
        .add_field(FieldSpec::new("stock_quantity", FieldKind::Numeric).non_negative())
        .add_field(FieldSpec::new("category", FieldKind::Text))
        .add_field(FieldSpec::new("on_sale", FieldKind::Boolean))
});

static CATALOG: LazyLock<FieldRegistry> = LazyLock::new(|| {
    FieldRegistry::standard()
        .clone()
        .add_field(FieldSpec::new("id", FieldKind::Numeric))
        .add_field(FieldSpec::new("tags", FieldKind::List))
});

/// Kind of value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text, compared case-insensitively
    Text,
    /// Real number
    Numeric,
    /// true / false
    Boolean,
    /// Sequence of strings, compared by membership
    List,
}

impl FieldKind {
    /// Operators this kind of field accepts
    pub fn allowed_operators(&self) -> &'static [Operator] {
        match self {
            FieldKind::Numeric => &Operator::ALL,
            FieldKind::Text | FieldKind::Boolean | FieldKind::List => &Operator::EQUALITY,
        }
    }

    /// Whether `op` may be applied to a field of this kind
    pub fn allows(&self, op: Operator) -> bool {
        self.allowed_operators().contains(&op)
    }
}

/// A field in the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Canonical (lowercase) field name
    pub name: String,

    /// Value kind
    pub kind: FieldKind,

    /// Whether negative literals are rejected
    #[serde(default)]
    pub non_negative: bool,

    /// Values suggested to authors; anything else triggers an advisory diagnostic
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggested_values: Vec<String>,
}

impl FieldSpec {
    /// Create a new field
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into().to_lowercase(),
            kind,
            non_negative: false,
            suggested_values: Vec::new(),
        }
    }

    /// Mark the field as non-negative
    pub fn non_negative(mut self) -> Self {
        self.non_negative = true;
        self
    }

    /// Set the suggested values
    pub fn with_suggested_values(mut self, values: &[&str]) -> Self {
        self.suggested_values = values.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn is_numeric(&self) -> bool {
        self.kind == FieldKind::Numeric
    }

    pub fn is_boolean(&self) -> bool {
        self.kind == FieldKind::Boolean
    }
}

/// Ordered, immutable lookup table of fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldRegistry {
    fields: Vec<FieldSpec>,
}

impl FieldRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The six fields exposed to segment authors:
    /// `title`, `price`, `stock_status`, `stock_quantity`, `category`, `on_sale`
    pub fn standard() -> &'static FieldRegistry {
        &STANDARD
    }

    /// The standard fields plus the evaluation-only `id` and `tags` fields
    pub fn catalog() -> &'static FieldRegistry {
        &CATALOG
    }

    /// Add a field, replacing any existing field with the same name
    pub fn add_field(mut self, field: FieldSpec) -> Self {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    /// Get a field by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        let name = name.to_lowercase();
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check whether a field exists (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All fields in registration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Field names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Comma separated list of every field name
    pub fn field_list(&self) -> String {
        self.names().join(", ")
    }

    /// Comma separated list of the numeric field names
    pub fn numeric_field_list(&self) -> String {
        self.fields
            .iter()
            .filter(|f| f.is_numeric())
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
