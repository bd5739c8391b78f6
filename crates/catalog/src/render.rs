//! Main rendering logic for TUI.

use catalog_core::view::products::build_products_view;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::state::{AppState, PopupState};
use crate::widgets::{
    render_delete_confirm, render_detail, render_header, render_help, render_products,
    render_quit_confirm, render_status,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(3),    // Products table
        Constraint::Length(1), // Status / search input
    ])
    .split(area);

    let view = build_products_view(&state.table);
    state.resolve_selection(&view.row_ids());

    render_header(frame, chunks[0], state, &view);
    render_products(frame, chunks[1], state, &view);
    render_status(frame, chunks[2], state);

    // Popups (rendered last to overlay everything).
    match state.popup {
        PopupState::None => {}
        PopupState::Help { scroll } => render_help(frame, area, scroll),
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
        PopupState::Detail { id } => {
            let product = state.table.records().iter().find(|p| p.id == id);
            render_detail(frame, area, id, product);
        }
        PopupState::DeleteConfirm { id } => {
            let product = state.table.records().iter().find(|p| p.id == id);
            render_delete_confirm(frame, area, id, product);
        }
    }
}
