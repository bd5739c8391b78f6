//! Quit and delete confirmation popups.

use catalog_core::models::Product;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::popup_area;
use crate::style::Styles;

fn render_confirm(frame: &mut Frame, area: Rect, title: &str, question: String, yes: &str, no: &str) {
    let popup = popup_area(area, 50, 40, 60, 7);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Styles::popup_border());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let content = vec![
        Line::from(Span::raw(question)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Styles::key()),
            Span::styled(" or ", Styles::dim()),
            Span::styled(yes, Styles::key()),
            Span::styled(" → confirm", Styles::dim()),
        ]),
        Line::from(vec![
            Span::styled("Esc", Styles::key()),
            Span::styled(" or ", Styles::dim()),
            Span::styled(no, Styles::key()),
            Span::styled(" → cancel", Styles::dim()),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Styles::default());
    frame.render_widget(paragraph, inner);
}

/// Renders a centered quit confirmation popup.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    render_confirm(
        frame,
        area,
        "Exit catalog",
        "Are you sure you want to quit?".to_string(),
        "q",
        "n",
    );
}

/// Renders a centered delete confirmation popup for `product`.
pub fn render_delete_confirm(frame: &mut Frame, area: Rect, id: u64, product: Option<&Product>) {
    let question = match product {
        Some(p) => format!("Delete \"{}\" (#{})?", p.name, p.id),
        None => format!("Delete product #{}?", id),
    };
    render_confirm(frame, area, "Delete product", question, "y", "n");
}
