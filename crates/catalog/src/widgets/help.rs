//! Help popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::popup_area;
use crate::style::Styles;

const KEYS: &[(&str, &str)] = &[
    ("↑/↓ j/k", "select row"),
    ("←/→ h/l", "previous / next page"),
    ("PgUp/PgDn", "previous / next page"),
    ("Home/End", "first / last page"),
    ("[ / ]", "smaller / larger pages"),
    ("s", "sort by next column"),
    ("S", "flip sort direction"),
    ("x", "clear sort"),
    ("/", "search name and description"),
    ("c", "cycle category (… → all)"),
    ("Esc", "clear all filters"),
    ("Enter", "product details"),
    ("+ / -", "stock +1 / -1"),
    ("D", "duplicate product"),
    ("d", "delete product"),
    ("?", "toggle help"),
    ("q", "quit"),
];

pub fn render_help(frame: &mut Frame, area: Rect, scroll: usize) {
    let height = (KEYS.len() as u16).saturating_add(2);
    let popup = popup_area(area, 60, 44, 64, height);
    frame.render_widget(Clear, popup);

    let lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("{:<12}", key), Styles::key()),
                Span::raw(*what),
            ])
        })
        .collect();

    let max_scroll = KEYS.len().saturating_sub(popup.height.saturating_sub(2) as usize);
    let scroll = scroll.min(max_scroll) as u16;

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Styles::popup_border()),
        )
        .scroll((scroll, 0))
        .style(Styles::default());
    frame.render_widget(paragraph, popup);
}
