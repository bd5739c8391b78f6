//! Free-text and category filter predicates.

use std::collections::BTreeMap;

use super::field::Schema;

/// Per-character lowercase without word-final forms, so a longer query never
/// matches more than a shorter one.
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Combined filter predicates. An unset predicate imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query as typed by the user.
    query: String,
    /// Lowercased copy of `query`, used for matching.
    needle: String,
    /// Exact-match predicate per category field.
    categories: BTreeMap<&'static str, String>,
}

impl FilterState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.needle = fold_case(query);
    }

    pub fn category(&self, field: &str) -> Option<&str> {
        self.categories.get(field).map(String::as_str)
    }

    /// Active category predicates, ordered by field name.
    pub fn categories(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.categories.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Sets (`Some`) or removes (`None`) the predicate for `field`.
    pub fn set_category(&mut self, field: &'static str, value: Option<&str>) {
        match value {
            Some(v) => {
                self.categories.insert(field, v.to_string());
            }
            None => {
                self.categories.remove(field);
            }
        }
    }

    /// True when no predicate is set.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.categories.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Checks whether `record` passes every predicate.
    pub fn matches<R>(&self, schema: &Schema<R>, record: &R) -> bool {
        if !self.needle.is_empty() {
            let hit = schema
                .text_fields()
                .any(|f| fold_case(&f.value(record).to_string()).contains(&self.needle));
            if !hit {
                return false;
            }
        }

        self.categories.iter().all(|(field, expected)| {
            schema
                .field(field)
                .is_some_and(|f| f.value(record).to_string() == *expected)
        })
    }
}
