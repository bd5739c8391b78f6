//! Presentation types shared by the TUI and the text printer.
//!
//! A [`PageView`] is one visible page of a table, already formatted. The TUI
//! maps [`Tone`] to colors; the printer drops it.

/// Visual emphasis of a row or cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Plain,
    /// Needs attention, e.g. low stock.
    Warn,
    /// Unavailable, e.g. out of stock.
    Alert,
    Muted,
    Highlight,
}

/// Direction marker next to the header of the sorted column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMark {
    Ascending,
    Descending,
}

impl SortMark {
    pub fn arrow(self) -> char {
        match self {
            SortMark::Ascending => '▲',
            SortMark::Descending => '▼',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    /// Fixed width in cells. `None` takes the remaining space.
    pub width: Option<u16>,
    pub sort: Option<SortMark>,
}

impl Column {
    /// Header text with the sort arrow appended when this column is sorted.
    pub fn label(&self) -> String {
        match self.sort {
            Some(mark) => format!("{}{}", self.header, mark.arrow()),
            None => self.header.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub text: String,
    /// Overrides the row tone when set.
    pub tone: Option<Tone>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: None,
        }
    }

    pub fn toned(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView<Id> {
    pub id: Id,
    pub cells: Vec<Cell>,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView<Id> {
    pub title: String,
    pub columns: Vec<Column>,
    pub rows: Vec<RowView<Id>>,
    pub page_index: usize,
    pub page_count: usize,
    /// Rows passing the filters, across all pages.
    pub total: usize,
}

impl<Id: Copy> PageView<Id> {
    pub fn row_ids(&self) -> Vec<Id> {
        self.rows.iter().map(|r| r.id).collect()
    }
}

impl<Id> PageView<Id> {
    /// Index and label of the sorted column, if any.
    pub fn sorted_column(&self) -> Option<(usize, &Column)> {
        self.columns.iter().enumerate().find(|(_, c)| c.sort.is_some())
    }

    /// `"page 2/5 · 43 items"` (1-based page).
    pub fn paging_summary(&self) -> String {
        format!(
            "page {}/{} · {} item{}",
            self.page_index + 1,
            self.page_count,
            self.total,
            if self.total == 1 { "" } else { "s" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total: usize, sort: Option<SortMark>) -> PageView<u64> {
        PageView {
            title: String::new(),
            columns: vec![
                Column {
                    header: "ID",
                    width: Some(4),
                    sort: None,
                },
                Column {
                    header: "NAME",
                    width: None,
                    sort,
                },
            ],
            rows: Vec::new(),
            page_index: 0,
            page_count: 1,
            total,
        }
    }

    #[test]
    fn summary_pluralizes() {
        assert_eq!(page(1, None).paging_summary(), "page 1/1 · 1 item");
        assert_eq!(page(0, None).paging_summary(), "page 1/1 · 0 items");
    }

    #[test]
    fn sorted_column_label_has_arrow() {
        let p = page(3, Some(SortMark::Descending));
        let (idx, col) = p.sorted_column().unwrap();
        assert_eq!(idx, 1);
        assert_eq!(col.label(), "NAME▼");
        assert_eq!(p.columns[0].label(), "ID");
        assert!(page(3, None).sorted_column().is_none());
    }
}
