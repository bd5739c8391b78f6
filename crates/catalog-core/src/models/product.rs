//! Product record and its editable draft.

use serde::{Deserialize, Serialize};

use crate::table::{FieldRole, FieldSpec, FieldValue, Record, Schema};

/// Maximum product name length, in characters.
pub const MAX_NAME_LEN: usize = 80;

/// Field names used by the product schema.
pub mod fields {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const CATEGORY: &str = "category";
    pub const PRICE: &str = "price";
    pub const STOCK: &str = "stock";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
}

impl Product {
    pub fn with_draft(id: u64, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            category: draft.category,
            price: draft.price,
            stock: draft.stock,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl Record for Product {
    fn id(&self) -> u64 {
        self.id
    }

    fn schema() -> Schema<Self> {
        Schema::new(vec![
            FieldSpec::new(fields::ID, |p: &Product| {
                FieldValue::Integer(i64::try_from(p.id).unwrap_or(i64::MAX))
            }),
            FieldSpec::new(fields::NAME, |p: &Product| FieldValue::Text(p.name.clone()))
                .role(FieldRole::Text),
            FieldSpec::new(fields::DESCRIPTION, |p: &Product| {
                FieldValue::Text(p.description.clone())
            })
            .role(FieldRole::Text)
            .unsortable(),
            FieldSpec::new(fields::CATEGORY, |p: &Product| {
                FieldValue::Text(p.category.clone())
            })
            .role(FieldRole::Category),
            FieldSpec::new(fields::PRICE, |p: &Product| FieldValue::Float(p.price)),
            FieldSpec::new(fields::STOCK, |p: &Product| FieldValue::Integer(p.stock)),
        ])
    }
}

/// Editable part of a product, as submitted by a create/edit form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
}

impl From<&Product> for ProductDraft {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            description: p.description.clone(),
            category: p.category.clone(),
            price: p.price,
            stock: p.stock,
        }
    }
}

impl ProductDraft {
    /// Checks the form rules. Reports every failing field, not just the first.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new(fields::NAME, "name is required"));
        } else if name.chars().count() > MAX_NAME_LEN {
            errors.push(FieldError::new(
                fields::NAME,
                format!("name must be at most {} characters", MAX_NAME_LEN),
            ));
        }

        if self.category.trim().is_empty() {
            errors.push(FieldError::new(fields::CATEGORY, "category is required"));
        }

        if !self.price.is_finite() || self.price < 0.0 {
            errors.push(FieldError::new(
                fields::PRICE,
                "price must be a non-negative number",
            ));
        }

        if self.stock < 0 {
            errors.push(FieldError::new(fields::STOCK, "stock cannot be negative"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

/// A single failed form rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All rules a draft failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
