//! Product detail popup.

use catalog_core::fmt::format_price;
use catalog_core::models::Product;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::popup_area;
use crate::style::Styles;

const LABEL_WIDTH: usize = 12;

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), Styles::dim()),
        Span::raw(value),
    ])
}

pub fn render_detail(frame: &mut Frame, area: Rect, id: u64, product: Option<&Product>) {
    let popup = popup_area(area, 60, 40, 80, 12);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" Product #{} ", id))
        .borders(Borders::ALL)
        .border_style(Styles::popup_border());

    let lines = match product {
        None => vec![Line::from("This product no longer exists.")],
        Some(p) => vec![
            field("Name", p.name.clone()),
            field("Category", p.category.clone()),
            field("Price", format_price(p.price)),
            field(
                "Stock",
                if p.in_stock() {
                    p.stock.to_string()
                } else {
                    "out of stock".to_string()
                },
            ),
            field(
                "Description",
                if p.description.is_empty() {
                    "-".to_string()
                } else {
                    p.description.clone()
                },
            ),
            Line::from(""),
            Line::from(vec![
                Span::styled("+/-", Styles::key()),
                Span::styled(" stock  ", Styles::dim()),
                Span::styled("d", Styles::key()),
                Span::styled(" delete  ", Styles::dim()),
                Span::styled("Esc", Styles::key()),
                Span::styled(" close", Styles::dim()),
            ]),
        ],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Styles::default());
    frame.render_widget(paragraph, popup);
}
