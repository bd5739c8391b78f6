//! Generic tabular view-model: filtering, sorting, pagination.

mod field;
mod filter;
mod page;
mod sort;
mod view_model;

pub use field::{Accessor, Comparator, FieldRole, FieldSpec, FieldValue, Record, Schema};
pub use filter::FilterState;
pub use page::{DEFAULT_PAGE_SIZE, PageState};
pub use sort::{SortDirection, SortDirective, sort_rows};
pub use view_model::{TabularViewModel, VisiblePage};

/// Errors raised by the view-model setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewModelError {
    /// An argument was outside its valid domain (e.g. a zero page size).
    InvalidArgument(String),
}

impl std::fmt::Display for ViewModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewModelError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for ViewModelError {}
