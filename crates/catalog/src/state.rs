//! Application state management.

use catalog_core::models::{Product, product_fields as fields};
use catalog_core::table::{SortDirection, TabularViewModel};
use catalog_core::view::products::{COLUMNS, column_field};
use ratatui::widgets::TableState as RatatuiTableState;

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Filter,
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
    /// Product detail popup.
    Detail { id: u64 },
    /// Delete confirmation dialog.
    DeleteConfirm { id: u64 },
}

impl PopupState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// State of the products screen.
pub struct AppState {
    pub table: TabularViewModel<Product>,
    /// Selected row within the visible page.
    pub selected: usize,
    /// Tracked product id, follows the selected row across re-derivations.
    pub tracked_id: Option<u64>,
    /// Ids of the rows rendered last frame.
    pub visible_ids: Vec<u64>,
    pub input_mode: InputMode,
    pub filter_input: String,
    /// Query active when search input started; restored on cancel.
    saved_query: String,
    pub popup: PopupState,
    /// One-line message shown in the status bar.
    pub status: Option<String>,
    pub ratatui_state: RatatuiTableState,
}

impl AppState {
    pub fn new(table: TabularViewModel<Product>) -> Self {
        Self {
            table,
            selected: 0,
            tracked_id: None,
            visible_ids: Vec::new(),
            input_mode: InputMode::Normal,
            filter_input: String::new(),
            saved_query: String::new(),
            popup: PopupState::None,
            status: None,
            ratatui_state: RatatuiTableState::default(),
        }
    }

    /// Product id under the cursor, as of the last resolved frame.
    pub fn selected_id(&self) -> Option<u64> {
        self.visible_ids.get(self.selected).copied()
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.tracked_id = None;
    }

    pub fn select_down(&mut self) {
        self.selected = self.selected.saturating_add(1);
        self.tracked_id = None;
    }

    /// Page navigation by `delta` pages; the view-model clamps.
    pub fn move_page(&mut self, delta: i64) {
        let target = (self.table.page_index() as i64).saturating_add(delta);
        self.table.set_page_index(target);
        self.selected = 0;
        self.tracked_id = None;
    }

    pub fn first_page(&mut self) {
        self.table.set_page_index(0);
        self.selected = 0;
        self.tracked_id = None;
    }

    pub fn last_page(&mut self) {
        self.table.set_page_index(i64::MAX);
        self.selected = 0;
        self.tracked_id = None;
    }

    /// Advances the sort to the next column; past the last column the
    /// sort is cleared.
    pub fn next_sort_column(&mut self) {
        let current = self
            .table
            .sort()
            .and_then(|s| COLUMNS.iter().position(|(_, f, _)| *f == s.field));
        let next = match current {
            None => Some(0),
            Some(i) if i + 1 < COLUMNS.len() => Some(i + 1),
            Some(_) => None,
        };
        match next.and_then(column_field) {
            Some(field) => self
                .table
                .set_sort(Some(field), Some(SortDirection::Ascending)),
            None => self.table.set_sort(None, None),
        }
    }

    /// Flips the direction of the active sort.
    pub fn toggle_sort_direction(&mut self) {
        if let Some(field) = self.table.sort().map(|s| s.field) {
            self.table.set_sort(Some(field), None);
        }
    }

    /// Cycles the category predicate: All → first → … → last → All.
    pub fn cycle_category(&mut self) {
        let values = self.table.category_values(fields::CATEGORY);
        let current = self.table.filter().category(fields::CATEGORY);
        let next = match current {
            None => values.first(),
            Some(cur) => values
                .iter()
                .position(|v| v == cur)
                .and_then(|i| values.get(i + 1)),
        };
        let next = next.cloned();
        self.table
            .set_category_filter(fields::CATEGORY, next.as_deref());
        self.selected = 0;
        self.tracked_id = None;
    }

    /// Changes the page size by `delta`, reporting a rejected size in the
    /// status bar.
    pub fn resize_page(&mut self, delta: i64) {
        let size = (self.table.page_size() as i64).saturating_add(delta);
        let size = usize::try_from(size).unwrap_or(0);
        match self.table.set_page_size(size) {
            Ok(()) => self.status = Some(format!("page size {}", size)),
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    /// Enters search input, starting from the current query.
    pub fn begin_filter_input(&mut self) {
        self.saved_query = self.table.filter().query().to_string();
        self.filter_input = self.saved_query.clone();
        self.input_mode = InputMode::Filter;
    }

    /// Leaves search input, restoring the query it started from.
    pub fn cancel_filter_input(&mut self) {
        self.filter_input = std::mem::take(&mut self.saved_query);
        self.input_mode = InputMode::Normal;
        self.apply_filter_input();
    }

    /// Applies `filter_input` as the text query.
    pub fn apply_filter_input(&mut self) {
        self.table.set_text_filter(&self.filter_input);
        self.selected = 0;
        self.tracked_id = None;
    }

    /// Resolves selection after derivation: applies the tracked id,
    /// clamps the selected index, and syncs ratatui state.
    pub fn resolve_selection(&mut self, row_ids: &[u64]) {
        if let Some(tracked) = self.tracked_id {
            if let Some(idx) = row_ids.iter().position(|&id| id == tracked) {
                self.selected = idx;
            } else {
                self.tracked_id = None;
            }
        }

        if !row_ids.is_empty() {
            self.selected = self.selected.min(row_ids.len() - 1);
            self.tracked_id = Some(row_ids[self.selected]);
        } else {
            self.selected = 0;
            self.tracked_id = None;
        }

        self.visible_ids = row_ids.to_vec();
        self.ratatui_state.select(Some(self.selected));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::models::sample_catalog;

    fn state() -> AppState {
        let mut table = TabularViewModel::for_record();
        table.set_records(sample_catalog());
        AppState::new(table)
    }

    #[test]
    fn sort_cycles_through_columns_then_clears() {
        let mut s = state();
        for (_, field, _) in COLUMNS {
            s.next_sort_column();
            assert_eq!(s.table.sort().map(|d| d.field), Some(*field));
        }
        s.next_sort_column();
        assert!(s.table.sort().is_none());
    }

    #[test]
    fn toggle_direction_without_sort_is_noop() {
        let mut s = state();
        s.toggle_sort_direction();
        assert!(s.table.sort().is_none());

        s.next_sort_column();
        s.toggle_sort_direction();
        assert_eq!(
            s.table.sort().map(|d| d.direction),
            Some(SortDirection::Descending)
        );
    }

    #[test]
    fn category_cycle_returns_to_all() {
        let mut s = state();
        let values = s.table.category_values(fields::CATEGORY);
        for v in &values {
            s.cycle_category();
            assert_eq!(s.table.filter().category(fields::CATEGORY), Some(v.as_str()));
        }
        s.cycle_category();
        assert_eq!(s.table.filter().category(fields::CATEGORY), None);
    }

    #[test]
    fn resolve_selection_follows_tracked_id() {
        let mut s = state();
        s.resolve_selection(&[1, 2, 3]);
        s.select_down();
        s.resolve_selection(&[1, 2, 3]);
        assert_eq!(s.selected_id(), Some(2));

        // Same product moves to the front after a re-sort.
        s.resolve_selection(&[2, 3, 1]);
        assert_eq!(s.selected, 0);
        assert_eq!(s.selected_id(), Some(2));
    }

    #[test]
    fn resolve_selection_clamps_when_tracked_row_disappears() {
        let mut s = state();
        s.selected = 5;
        s.resolve_selection(&[7, 8]);
        assert_eq!(s.selected, 1);
        s.resolve_selection(&[]);
        assert_eq!(s.selected, 0);
        assert_eq!(s.selected_id(), None);
    }

    #[test]
    fn shrinking_page_size_to_zero_is_reported() {
        let mut s = state();
        s.table.set_page_size(1).unwrap();
        s.resize_page(-1);
        assert_eq!(s.table.page_size(), 1);
        assert!(s.status.as_deref().is_some_and(|m| m.contains("page size")));
    }

    #[test]
    fn page_moves_are_clamped() {
        let mut s = state();
        s.table.set_page_size(5).unwrap();
        s.move_page(-3);
        assert_eq!(s.table.page_index(), 0);
        s.last_page();
        assert_eq!(s.table.page_index(), s.table.page_count() - 1);
        s.move_page(10);
        assert_eq!(s.table.page_index(), s.table.page_count() - 1);
    }
}
