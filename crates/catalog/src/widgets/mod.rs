//! TUI widgets.

mod confirm;
mod detail;
mod header;
mod help;
mod products;

pub use confirm::{render_delete_confirm, render_quit_confirm};
pub use detail::render_detail;
pub use header::{render_header, render_status};
pub use help::render_help;
pub use products::render_products;

use ratatui::layout::Rect;

/// Centered popup area: `percent` of the width clamped to
/// `[min_width, max_width]`, fixed `height` clamped to the screen.
pub(crate) fn popup_area(
    area: Rect,
    percent: u16,
    min_width: u16,
    max_width: u16,
    height: u16,
) -> Rect {
    let scaled = u32::from(area.width) * u32::from(percent) / 100;
    let width = u16::try_from(scaled)
        .unwrap_or(u16::MAX)
        .clamp(min_width, max_width)
        .min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
