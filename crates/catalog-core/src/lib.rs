//! catalog-core: shared library for the catalog viewer.
//!
//! Provides:
//! - `table`: generic tabular view-model (filtering, sorting, pagination)
//! - `models`: product record, draft validation, sample catalog
//! - `provider`: record provider abstraction and the in-memory product store
//! - `view`: UI-agnostic table view models built from a visible page
//! - `fmt`: shared formatting helpers (prices, stock, truncation)

pub mod fmt;
pub mod models;
pub mod provider;
pub mod table;
pub mod view;
