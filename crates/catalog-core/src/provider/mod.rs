//! Provider abstraction for record data sources.
//!
//! This module defines the `RecordProvider` trait that lets the viewer read
//! records from any backend through one interface, and `ProductStore`, the
//! in-memory mock backend that also accepts create/update/delete.

mod store;

pub use store::{ProductStore, StoreError};

/// Error types that can occur while loading records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// I/O error while reading data.
    Io(String),
    /// Error parsing stored data.
    Parse(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::Io(msg) => write!(f, "I/O error: {}", msg),
            ProviderError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Abstraction for record data sources (the data-fetch side of a backend).
///
/// Consumers call `fetch()` to get the full collection and compare
/// `revision()` against the last value they saw to know when to fetch again.
pub trait RecordProvider<R> {
    /// Returns a fresh copy of the full record collection.
    fn fetch(&self) -> Result<Vec<R>, ProviderError>;

    /// Monotonic counter, bumped after every successful mutation.
    fn revision(&self) -> u64;
}
