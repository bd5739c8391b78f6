//! Single-column sort directive.

use std::cmp::Ordering;

use super::field::FieldSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }

    /// Parses `asc`/`ascending`/`desc`/`descending` (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// The active sort instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDirective {
    pub field: &'static str,
    pub direction: SortDirection,
}

impl SortDirective {
    /// Computes the directive that follows a `set_sort` request.
    ///
    /// `current` is the active directive, `field` the (already validated)
    /// requested field. Without an explicit direction, a new field starts
    /// ascending and the active field flips.
    pub fn next(
        current: Option<&SortDirective>,
        field: &'static str,
        direction: Option<SortDirection>,
    ) -> SortDirective {
        let direction = match (direction, current) {
            (Some(d), _) => d,
            (None, Some(cur)) if cur.field == field => cur.direction.flipped(),
            (None, _) => SortDirection::Ascending,
        };
        SortDirective { field, direction }
    }
}

/// Stable sort of `rows` by `spec` in `direction`.
///
/// Descending reverses the comparator, not the output, so rows with equal
/// keys keep their relative order in both directions.
pub fn sort_rows<R>(rows: &mut [&R], spec: &FieldSpec<R>, direction: SortDirection) {
    rows.sort_by(|a, b| direction.apply(spec.compare(a, b)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::field::FieldValue;

    fn by_key() -> FieldSpec<(i64, char)> {
        FieldSpec::new("k", |r: &(i64, char)| FieldValue::Integer(r.0))
    }

    #[test]
    fn next_new_field_defaults_ascending() {
        let d = SortDirective::next(None, "price", None);
        assert_eq!(d.direction, SortDirection::Ascending);
    }

    #[test]
    fn next_same_field_flips() {
        let cur = SortDirective {
            field: "price",
            direction: SortDirection::Ascending,
        };
        let d = SortDirective::next(Some(&cur), "price", None);
        assert_eq!(d.direction, SortDirection::Descending);
        let d = SortDirective::next(Some(&d), "price", None);
        assert_eq!(d.direction, SortDirection::Ascending);
    }

    #[test]
    fn next_other_field_resets_to_ascending() {
        let cur = SortDirective {
            field: "price",
            direction: SortDirection::Descending,
        };
        let d = SortDirective::next(Some(&cur), "name", None);
        assert_eq!(d.field, "name");
        assert_eq!(d.direction, SortDirection::Ascending);
    }

    #[test]
    fn next_explicit_direction_wins() {
        let cur = SortDirective {
            field: "price",
            direction: SortDirection::Descending,
        };
        let d = SortDirective::next(Some(&cur), "price", Some(SortDirection::Descending));
        assert_eq!(d.direction, SortDirection::Descending);
    }

    #[test]
    fn sort_is_stable_both_directions() {
        let data = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let spec = by_key();

        let mut rows: Vec<&(i64, char)> = data.iter().collect();
        sort_rows(&mut rows, &spec, SortDirection::Ascending);
        let tags: String = rows.iter().map(|r| r.1).collect();
        assert_eq!(tags, "bdac");

        let mut rows: Vec<&(i64, char)> = data.iter().collect();
        sort_rows(&mut rows, &spec, SortDirection::Descending);
        let tags: String = rows.iter().map(|r| r.1).collect();
        assert_eq!(tags, "acbd");
    }

    #[test]
    fn parse_direction() {
        assert_eq!(SortDirection::parse("ASC"), Some(SortDirection::Ascending));
        assert_eq!(
            SortDirection::parse("descending"),
            Some(SortDirection::Descending)
        );
        assert_eq!(SortDirection::parse("up"), None);
    }
}
