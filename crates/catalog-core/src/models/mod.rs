//! Catalog data models.

mod product;
mod sample;

pub use product::{
    FieldError, MAX_NAME_LEN, Product, ProductDraft, ValidationErrors, fields as product_fields,
};
pub use sample::sample_catalog;
