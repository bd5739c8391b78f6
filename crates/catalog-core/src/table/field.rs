//! Field schema: how the view-model reads, compares and filters a record.

use std::cmp::Ordering;
use std::fmt;

/// Scalar value extracted from a record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Natural total order used when a field has no custom comparator.
    ///
    /// Numbers compare numerically (integers and floats against each other via
    /// `f64::total_cmp`), text compares by Unicode code point. When the types
    /// are mixed, numbers sort before text.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Float(a), FieldValue::Float(b)) => a.total_cmp(b),
            (FieldValue::Integer(a), FieldValue::Float(b)) => (*a as f64).total_cmp(b),
            (FieldValue::Float(a), FieldValue::Integer(b)) => a.total_cmp(&(*b as f64)),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Text(_), _) => Ordering::Greater,
            (_, FieldValue::Text(_)) => Ordering::Less,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// How a field takes part in filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldRole {
    /// Not filterable.
    #[default]
    None,
    /// Searched by the free-text query.
    Text,
    /// Constrained by an exact-match category predicate.
    Category,
}

/// Reads a field value out of a record.
pub type Accessor<R> = fn(&R) -> FieldValue;

/// Custom ordering for a field, replacing the natural value order.
pub type Comparator<R> = fn(&R, &R) -> Ordering;

/// One entry of the field configuration table.
pub struct FieldSpec<R> {
    pub name: &'static str,
    pub accessor: Accessor<R>,
    pub comparator: Option<Comparator<R>>,
    pub sortable: bool,
    pub role: FieldRole,
}

// Manual impls: derives would require `R: Clone`.
impl<R> Clone for FieldSpec<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for FieldSpec<R> {}

impl<R> fmt::Debug for FieldSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("sortable", &self.sortable)
            .field("role", &self.role)
            .finish()
    }
}

impl<R> FieldSpec<R> {
    /// Sortable field with no filter role.
    pub fn new(name: &'static str, accessor: Accessor<R>) -> Self {
        Self {
            name,
            accessor,
            comparator: None,
            sortable: true,
            role: FieldRole::None,
        }
    }

    pub fn role(mut self, role: FieldRole) -> Self {
        self.role = role;
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn comparator(mut self, comparator: Comparator<R>) -> Self {
        self.comparator = Some(comparator);
        self
    }

    pub fn value(&self, record: &R) -> FieldValue {
        (self.accessor)(record)
    }

    pub fn compare(&self, a: &R, b: &R) -> Ordering {
        match self.comparator {
            Some(cmp) => cmp(a, b),
            None => self.value(a).natural_cmp(&self.value(b)),
        }
    }
}

/// Field configuration table for a record type.
pub struct Schema<R> {
    fields: Vec<FieldSpec<R>>,
}

impl<R> Clone for Schema<R> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
        }
    }
}

impl<R> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.fields.iter()).finish()
    }
}

impl<R> Schema<R> {
    pub fn new(fields: Vec<FieldSpec<R>>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec<R>> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn fields(&self) -> &[FieldSpec<R>] {
        &self.fields
    }

    /// Names of all sortable fields, in schema order.
    pub fn sortable_names(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.sortable)
            .map(|f| f.name)
            .collect()
    }

    pub fn text_fields(&self) -> impl Iterator<Item = &FieldSpec<R>> {
        self.fields.iter().filter(|f| f.role == FieldRole::Text)
    }
}

/// Trait for records shown in a tabular view.
pub trait Record: Clone {
    /// Stable unique identifier.
    fn id(&self) -> u64;

    /// Field configuration table for this record type.
    fn schema() -> Schema<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_cmp_numbers_across_types() {
        let a = FieldValue::Integer(3);
        let b = FieldValue::Float(2.5);
        assert_eq!(a.natural_cmp(&b), Ordering::Greater);
        assert_eq!(b.natural_cmp(&a), Ordering::Less);
        assert_eq!(
            FieldValue::Integer(2).natural_cmp(&FieldValue::Float(2.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn natural_cmp_text_is_code_point_order() {
        let upper = FieldValue::Text("Zebra".into());
        let lower = FieldValue::Text("apple".into());
        // 'Z' (U+005A) sorts before 'a' (U+0061).
        assert_eq!(upper.natural_cmp(&lower), Ordering::Less);
    }

    #[test]
    fn natural_cmp_numbers_before_text() {
        let n = FieldValue::Integer(i64::MAX);
        let t = FieldValue::Text(String::new());
        assert_eq!(n.natural_cmp(&t), Ordering::Less);
        assert_eq!(t.natural_cmp(&n), Ordering::Greater);
    }

    #[test]
    fn custom_comparator_overrides_natural_order() {
        let spec: FieldSpec<i64> = FieldSpec::new("n", |v| FieldValue::Integer(*v))
            .comparator(|a, b| b.cmp(a));
        assert_eq!(spec.compare(&1, &2), Ordering::Greater);
    }

    #[test]
    fn schema_lookup_and_roles() {
        let schema: Schema<(i64, String)> = Schema::new(vec![
            FieldSpec::new("n", |r: &(i64, String)| FieldValue::Integer(r.0)),
            FieldSpec::new("s", |r: &(i64, String)| FieldValue::Text(r.1.clone()))
                .role(FieldRole::Text)
                .unsortable(),
        ]);
        assert!(schema.field("n").is_some());
        assert!(schema.field("missing").is_none());
        assert_eq!(schema.sortable_names(), vec!["n"]);
        assert_eq!(schema.text_fields().count(), 1);
    }
}
