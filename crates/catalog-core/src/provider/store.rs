//! In-memory product backend (mock REST API).

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use crate::models::{Product, ProductDraft, ValidationErrors};

use super::{ProviderError, RecordProvider};

/// Errors returned by store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No product with this id.
    NotFound(u64),
    /// The submitted draft failed validation.
    Invalid(ValidationErrors),
    /// The largest id is already `u64::MAX`.
    IdsExhausted,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "Product {} not found", id),
            StoreError::Invalid(errors) => write!(f, "Invalid product: {}", errors),
            StoreError::IdsExhausted => write!(f, "No product id left to assign"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<ValidationErrors> for StoreError {
    fn from(errors: ValidationErrors) -> Self {
        StoreError::Invalid(errors)
    }
}

/// Product collection with CRUD keyed by id.
///
/// Changes live only as long as the store; nothing is written back.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<Product>,
    revision: u64,
}

impl ProductStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            revision: 0,
        }
    }

    /// Loads a JSON array of products. Ids must be unique and every product
    /// must pass the same validation as `create`.
    pub fn from_json_str(json: &str) -> Result<Self, ProviderError> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| ProviderError::Parse(e.to_string()))?;
        check_loaded(&products)?;
        Ok(Self::new(products))
    }

    /// Loads a JSON array of products from `path`.
    pub fn from_json_file(path: &Path) -> Result<Self, ProviderError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ProviderError::Io(format!("{}: {}", path.display(), e)))?;
        let store = Self::from_json_str(&json)?;
        info!(path = %path.display(), count = store.products.len(), "catalog loaded");
        Ok(store)
    }

    /// All products in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Validates `draft` and adds it under the next free id.
    pub fn create(&mut self, draft: ProductDraft) -> Result<Product, StoreError> {
        draft.validate()?;
        let id = self.next_id()?;
        let product = Product::with_draft(id, draft);
        self.products.push(product.clone());
        self.bump();
        info!(id, name = %product.name, "product created");
        Ok(product)
    }

    /// Validates `draft` and replaces the product stored under `id`.
    pub fn update(&mut self, id: u64, draft: ProductDraft) -> Result<Product, StoreError> {
        let idx = self.position(id)?;
        draft.validate()?;
        let product = Product::with_draft(id, draft);
        self.products[idx] = product.clone();
        self.bump();
        info!(id, "product updated");
        Ok(product)
    }

    /// Removes and returns the product stored under `id`.
    pub fn delete(&mut self, id: u64) -> Result<Product, StoreError> {
        let idx = self.position(id)?;
        let removed = self.products.remove(idx);
        self.bump();
        info!(id, name = %removed.name, "product deleted");
        Ok(removed)
    }

    fn position(&self, id: u64) -> Result<usize, StoreError> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn next_id(&self) -> Result<u64, StoreError> {
        let max = self.products.iter().map(|p| p.id).max().unwrap_or(0);
        max.checked_add(1).ok_or(StoreError::IdsExhausted)
    }

    fn bump(&mut self) {
        self.revision += 1;
        debug!(revision = self.revision, "store revision bumped");
    }
}

fn check_loaded(products: &[Product]) -> Result<(), ProviderError> {
    let mut seen = HashSet::with_capacity(products.len());
    for p in products {
        if !seen.insert(p.id) {
            return Err(ProviderError::Parse(format!("duplicate product id {}", p.id)));
        }
        ProductDraft::from(p)
            .validate()
            .map_err(|e| ProviderError::Parse(format!("product {}: {}", p.id, e)))?;
    }
    Ok(())
}

impl RecordProvider<Product> for ProductStore {
    fn fetch(&self) -> Result<Vec<Product>, ProviderError> {
        Ok(self.products.clone())
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
