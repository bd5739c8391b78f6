//! The tabular view-model itself.

use tracing::{debug, warn};

use super::ViewModelError;
use super::field::{FieldRole, Record, Schema};
use super::filter::FilterState;
use super::page::PageState;
use super::sort::{SortDirection, SortDirective, sort_rows};

/// One derived page of rows plus paging metadata.
#[derive(Debug, PartialEq)]
pub struct VisiblePage<'a, R> {
    pub rows: Vec<&'a R>,
    /// Zero-based, always `< page_count`.
    pub page_index: usize,
    /// At least 1, even when nothing matches.
    pub page_count: usize,
    pub total_filtered_count: usize,
}

/// State for one table instance: records, sort, filters and page.
///
/// Every setter leaves the page index within `[0, page_count - 1]`.
/// Derivation is recomputed on each read.
#[derive(Debug, Clone)]
pub struct TabularViewModel<R> {
    schema: Schema<R>,
    records: Vec<R>,
    sort: Option<SortDirective>,
    filter: FilterState,
    page: PageState,
}

impl<R: Record> TabularViewModel<R> {
    /// View-model over `R`'s own schema with the default page size.
    pub fn for_record() -> Self {
        Self::new(R::schema(), PageState::default())
    }
}

impl<R> TabularViewModel<R> {
    pub fn new(schema: Schema<R>, page: PageState) -> Self {
        Self {
            schema,
            records: Vec::new(),
            sort: None,
            filter: FilterState::default(),
            page,
        }
    }

    pub fn schema(&self) -> &Schema<R> {
        &self.schema
    }

    /// Records in the order they were supplied.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn sort(&self) -> Option<&SortDirective> {
        self.sort.as_ref()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn page_index(&self) -> usize {
        self.page.index()
    }

    pub fn page_size(&self) -> usize {
        self.page.size()
    }

    pub fn filtered_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| self.filter.matches(&self.schema, *r))
            .count()
    }

    pub fn page_count(&self) -> usize {
        self.page.page_count(self.filtered_count())
    }

    /// Replaces the working collection and re-clamps the page index.
    pub fn set_records(&mut self, records: Vec<R>) {
        debug!(count = records.len(), "records replaced");
        self.records = records;
        self.clamp_page();
    }

    /// Sets, toggles or clears the sort directive.
    ///
    /// A field that is unknown or not sortable is ignored.
    pub fn set_sort(&mut self, field: Option<&str>, direction: Option<SortDirection>) {
        let Some(name) = field else {
            self.sort = None;
            debug!("sort cleared");
            return;
        };

        let Some(spec) = self.schema.field(name).filter(|f| f.sortable) else {
            warn!(field = name, "ignoring sort on unknown or unsortable field");
            return;
        };

        let next = SortDirective::next(self.sort.as_ref(), spec.name, direction);
        debug!(field = next.field, direction = ?next.direction, "sort set");
        self.sort = Some(next);
    }

    /// Replaces the free-text query and returns to the first page.
    pub fn set_text_filter(&mut self, query: &str) {
        self.filter.set_query(query);
        self.page.reset();
        debug!(query, "text filter set");
    }

    /// Sets or clears the exact-match predicate of a category field and
    /// returns to the first page. `None` means "all categories".
    pub fn set_category_filter(&mut self, field: &str, value: Option<&str>) {
        let Some(spec) = self
            .schema
            .field(field)
            .filter(|f| f.role == FieldRole::Category)
        else {
            warn!(field, "ignoring filter on unknown or non-category field");
            return;
        };

        self.filter.set_category(spec.name, value);
        self.page.reset();
        debug!(field = spec.name, value = ?value, "category filter set");
    }

    /// Drops every predicate and returns to the first page.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.page.reset();
    }

    /// Moves to `index`, silently clamped to the valid page range.
    pub fn set_page_index(&mut self, index: i64) {
        let total = self.filtered_count();
        self.page.set_index(index, total);
    }

    /// Changes the page size and re-clamps the page index.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), ViewModelError> {
        if size == 0 {
            return Err(ViewModelError::InvalidArgument(
                "page size must be positive".to_string(),
            ));
        }
        let total = self.filtered_count();
        self.page.set_size(size, total);
        Ok(())
    }

    /// Distinct values of a category field over the current records, in
    /// first-seen order.
    pub fn category_values(&self, field: &str) -> Vec<String> {
        let Some(spec) = self
            .schema
            .field(field)
            .filter(|f| f.role == FieldRole::Category)
        else {
            return Vec::new();
        };

        let mut values: Vec<String> = Vec::new();
        for record in &self.records {
            let v = spec.value(record).to_string();
            if !values.contains(&v) {
                values.push(v);
            }
        }
        values
    }

    /// Filtered then sorted rows, all pages.
    pub fn sorted_rows(&self) -> Vec<&R> {
        let mut rows: Vec<&R> = self
            .records
            .iter()
            .filter(|r| self.filter.matches(&self.schema, *r))
            .collect();

        if let Some(directive) = &self.sort
            && let Some(spec) = self.schema.field(directive.field)
        {
            sort_rows(&mut rows, spec, directive.direction);
        }
        rows
    }

    /// Derives the visible page: filter, sort, slice.
    pub fn visible_page(&self) -> VisiblePage<'_, R> {
        let mut rows = self.sorted_rows();
        let total = rows.len();
        let range = self.page.range(total);
        rows.truncate(range.end);
        rows.drain(..range.start);

        VisiblePage {
            rows,
            page_index: self.page.index(),
            page_count: self.page.page_count(total),
            total_filtered_count: total,
        }
    }

    fn clamp_page(&mut self) {
        let total = self.filtered_count();
        self.page.clamp(total);
    }
}
