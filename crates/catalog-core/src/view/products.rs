//! Products page view.

use crate::fmt::{format_price, format_stock, truncate};
use crate::models::{Product, product_fields as fields};
use crate::table::{SortDirection, TabularViewModel};
use crate::view::common::{Cell, Column, PageView, RowView, SortMark, Tone};

/// Rows with fewer units than this are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Displayed columns in order: (header, schema field, fixed width).
/// NAME has no fixed width and fills the remaining space.
pub const COLUMNS: &[(&str, &str, Option<u16>)] = &[
    ("ID", fields::ID, Some(4)),
    ("PRICE", fields::PRICE, Some(10)),
    ("STOCK", fields::STOCK, Some(6)),
    ("CATEGORY", fields::CATEGORY, Some(12)),
    ("NAME", fields::NAME, None),
];

const NAME_MAX: usize = 48;

/// Schema field shown in column `col`.
pub fn column_field(col: usize) -> Option<&'static str> {
    COLUMNS.get(col).map(|(_, field, _)| *field)
}

fn stock_tone(p: &Product) -> Tone {
    if p.stock <= 0 {
        Tone::Alert
    } else if p.stock < LOW_STOCK_THRESHOLD {
        Tone::Warn
    } else {
        Tone::Plain
    }
}

fn title(table: &TabularViewModel<Product>) -> String {
    let filter = table.filter();
    let mut parts: Vec<String> = Vec::new();
    if !filter.query().is_empty() {
        parts.push(format!("search \"{}\"", filter.query()));
    }
    for (field, value) in filter.categories() {
        parts.push(format!("{}={}", field, value));
    }
    if parts.is_empty() {
        " Products ".to_string()
    } else {
        format!(" Products [{}] ", parts.join(", "))
    }
}

fn row(p: &Product) -> RowView<u64> {
    RowView {
        id: p.id,
        cells: vec![
            Cell::new(p.id.to_string()).toned(Tone::Muted),
            Cell::new(format_price(p.price)).toned(Tone::Highlight),
            Cell::new(format_stock(p.stock)),
            Cell::new(p.category.as_str()),
            Cell::new(truncate(&p.name, NAME_MAX)),
        ],
        tone: stock_tone(p),
    }
}

/// Builds the visible page of the products table.
pub fn build_products_view(table: &TabularViewModel<Product>) -> PageView<u64> {
    let page = table.visible_page();
    let sort = table.sort();

    let columns = COLUMNS
        .iter()
        .map(|&(header, field, width)| Column {
            header,
            width,
            sort: sort.filter(|s| s.field == field).map(|s| match s.direction {
                SortDirection::Ascending => SortMark::Ascending,
                SortDirection::Descending => SortMark::Descending,
            }),
        })
        .collect();

    PageView {
        title: title(table),
        columns,
        rows: page.rows.iter().map(|p| row(p)).collect(),
        page_index: page.page_index,
        page_count: page.page_count,
        total: page.total_filtered_count,
    }
}
