//! Header and status bars.

use catalog_core::view::common::PageView;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::{AppState, InputMode};
use crate::style::Styles;

/// Top bar: paging summary, sort and page size.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState, view: &PageView<u64>) {
    let sort = match view.sorted_column() {
        Some((_, col)) => format!("sort {}", col.label()),
        None => "unsorted".to_string(),
    };
    let text = format!(
        " catalog │ {} │ {} │ {}/page ",
        view.paging_summary(),
        sort,
        state.table.page_size()
    );
    frame.render_widget(Paragraph::new(text).style(Styles::header()), area);
}

/// Bottom bar: search input while typing, otherwise the last status
/// message or key hints.
pub fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match state.input_mode {
        InputMode::Filter => Line::from(vec![
            Span::styled("/", Styles::key()),
            Span::raw(state.filter_input.clone()),
            Span::styled("█", Styles::dim()),
        ]),
        InputMode::Normal => match &state.status {
            Some(msg) => Line::from(Span::raw(msg.clone())),
            None => Line::from(Span::styled(
                "?:help  /:search  c:category  s:sort  ←→:page  Enter:view  d:delete  q:quit",
                Styles::dim(),
            )),
        },
    };
    frame.render_widget(Paragraph::new(line), area);
}
