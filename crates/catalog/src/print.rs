//! Plain-text rendering of a table page (`--print`).

use std::fmt::Write;

use catalog_core::view::common::PageView;

/// Formats the page as an aligned text table with a paging footer.
pub fn format_table(view: &PageView<u64>) -> String {
    let headers: Vec<String> = view.columns.iter().map(|c| c.label()).collect();

    // Column widths: widest of header and cells.
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &view.rows {
        for (i, cell) in row.cells.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.text.chars().count());
            }
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title.trim());
    push_line(&mut out, &headers, &widths);
    for row in &view.rows {
        let cells: Vec<String> = row.cells.iter().map(|c| c.text.clone()).collect();
        push_line(&mut out, &cells, &widths);
    }
    if view.rows.is_empty() {
        let _ = writeln!(out, "(no matching products)");
    }
    let _ = writeln!(out, "{}", view.paging_summary());
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i == last {
            line.push_str(cell);
        } else {
            let pad = widths[i].saturating_sub(cell.chars().count());
            line.push_str(cell);
            line.push_str(&" ".repeat(pad + 2));
        }
    }
    let _ = writeln!(out, "{}", line.trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::models::{Product, product_fields as fields, sample_catalog};
    use catalog_core::table::{SortDirection, TabularViewModel};
    use catalog_core::view::products::build_products_view;

    fn table() -> TabularViewModel<Product> {
        let mut t = TabularViewModel::for_record();
        t.set_records(sample_catalog());
        t
    }

    #[test]
    fn prints_rows_and_footer() {
        let mut t = table();
        t.set_category_filter(fields::CATEGORY, Some("Furniture"));
        t.set_sort(Some(fields::PRICE), Some(SortDirection::Ascending));
        t.set_page_size(2).unwrap();

        let out = format_table(&build_products_view(&t));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Products [category=Furniture]");
        assert!(lines[1].starts_with("ID"));
        assert!(lines[1].contains("PRICE▲"));
        assert!(lines[2].ends_with("Standing Mat"));
        assert!(lines[3].ends_with("Chair"));
        assert_eq!(lines[4], "page 1/2 · 4 items");
    }

    #[test]
    fn empty_page_says_so() {
        let mut t = table();
        t.set_text_filter("zzz");
        let out = format_table(&build_products_view(&t));
        assert!(out.contains("(no matching products)"));
        assert!(out.contains("page 1/1 · 0 items"));
    }
}
