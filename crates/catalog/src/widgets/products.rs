//! Products table widget.

use catalog_core::view::common::{Cell as ViewCell, PageView};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table};

use crate::state::AppState;
use crate::style::Styles;

fn cell(c: &ViewCell) -> Span<'static> {
    match c.tone {
        Some(tone) => Span::styled(c.text.clone(), Styles::for_tone(tone)),
        None => Span::raw(c.text.clone()),
    }
}

pub fn render_products(frame: &mut Frame, area: Rect, state: &mut AppState, view: &PageView<u64>) {
    let block = Block::default()
        .title(view.title.clone())
        .borders(Borders::ALL)
        .style(Styles::default());
    frame.render_widget(Clear, area);

    if view.rows.is_empty() {
        let message = if state.table.records().is_empty() {
            "Catalog is empty"
        } else {
            "No products match the current filters (Esc clears them)"
        };
        frame.render_widget(Paragraph::new(message).block(block), area);
        return;
    }

    let header = Row::new(view.columns.iter().map(|c| c.label()))
        .style(Styles::table_header())
        .height(1);

    let rows = view.rows.iter().map(|r| {
        Row::new(r.cells.iter().map(cell))
            .style(Styles::for_tone(r.tone))
            .height(1)
    });

    let widths = view.columns.iter().map(|c| match c.width {
        Some(w) => Constraint::Length(w),
        None => Constraint::Fill(1),
    });

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Styles::selected());

    frame.render_stateful_widget(table, area, &mut state.ratatui_state);
}
