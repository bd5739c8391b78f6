//! UI-agnostic view models.
//!
//! Each sub-module builds a [`common::PageView`] from a tabular view-model.
//! The TUI and the plain-text printer render it.

pub mod common;
pub mod products;
