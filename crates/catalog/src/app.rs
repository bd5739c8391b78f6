//! Main TUI application.

use std::io;
use std::time::Duration;

use catalog_core::models::{Product, ProductDraft};
use catalog_core::provider::{ProductStore, RecordProvider, StoreError};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, error, warn};

use crate::event::{Event, EventHandler};
use crate::input::{KeyAction, handle_key};
use crate::render::render;
use crate::state::{AppState, PopupState};

/// Main TUI application.
pub struct App {
    store: ProductStore,
    state: AppState,
    /// Store revision the table was last refreshed from.
    seen_revision: Option<u64>,
    should_quit: bool,
}

impl App {
    /// Creates a new App over `store`; `state` carries the initial
    /// sort/filter/page settings.
    pub fn new(store: ProductStore, state: AppState) -> Self {
        Self {
            store,
            state,
            seen_revision: None,
            should_quit: false,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        enable_raw_mode()?;
        let mut terminal = or_restore(enter_screen(), restore_quietly)?;

        let events = EventHandler::new(tick_rate);
        self.refresh();

        let result = self.event_loop(&mut terminal, &events);

        restore_terminal()?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &EventHandler,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(Event::Tick) => self.refresh(),
                Ok(Event::Key(key)) => {
                    let action = handle_key(&mut self.state, key);
                    self.apply(action);
                }
                Ok(Event::Resize) => {}
                Err(_) => self.should_quit = true,
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Re-fetches from the store when its revision moved.
    pub fn refresh(&mut self) {
        let revision = self.store.revision();
        if self.seen_revision == Some(revision) {
            return;
        }
        match self.store.fetch() {
            Ok(products) => {
                debug!(revision, count = products.len(), "refreshing table");
                self.state.table.set_records(products);
                self.seen_revision = Some(revision);
            }
            Err(e) => {
                error!(error = %e, "fetch failed");
                self.state.status = Some(format!("Fetch failed: {}", e));
            }
        }
    }

    /// Performs the mutation requested by a key and refreshes the table.
    pub fn apply(&mut self, action: KeyAction) {
        let result = match action {
            KeyAction::None => return,
            KeyAction::Quit => {
                self.should_quit = true;
                return;
            }
            KeyAction::Delete(id) => self
                .store
                .delete(id)
                .map(|p| format!("Deleted \"{}\"", p.name)),
            KeyAction::AdjustStock(id, delta) => self.adjust_stock(id, delta),
            KeyAction::Duplicate(id) => self.duplicate(id),
        };

        match result {
            Ok(msg) => self.state.status = Some(msg),
            Err(e) => {
                warn!(error = %e, "mutation rejected");
                self.state.status = Some(e.to_string());
            }
        }

        if let PopupState::Detail { id } = self.state.popup
            && self.store.get(id).is_none()
        {
            self.state.popup = PopupState::None;
        }
        self.refresh();
    }

    fn adjust_stock(&mut self, id: u64, delta: i64) -> Result<String, StoreError> {
        let product = self.product(id)?;
        let draft = ProductDraft {
            stock: product.stock.saturating_add(delta),
            ..ProductDraft::from(&product)
        };
        let updated = self.store.update(id, draft)?;
        Ok(format!("\"{}\" stock: {}", updated.name, updated.stock))
    }

    fn duplicate(&mut self, id: u64) -> Result<String, StoreError> {
        let product = self.product(id)?;
        let draft = ProductDraft {
            name: format!("{} (copy)", product.name),
            ..ProductDraft::from(&product)
        };
        let created = self.store.create(draft)?;
        self.state.tracked_id = Some(created.id);
        Ok(format!("Created \"{}\" (#{})", created.name, created.id))
    }

    fn product(&self, id: u64) -> Result<Product, StoreError> {
        self.store.get(id).cloned().ok_or(StoreError::NotFound(id))
    }
}

fn enter_screen() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    execute!(io::stdout(), EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

/// Leaves the alternate screen and raw mode. Both steps run even if the
/// first fails.
fn restore_terminal() -> io::Result<()> {
    let leave = execute!(io::stdout(), LeaveAlternateScreen);
    let raw = disable_raw_mode();
    leave.and(raw)
}

fn restore_quietly() {
    if let Err(e) = restore_terminal() {
        warn!(error = %e, "failed to restore terminal");
    }
}

/// Passes `setup` through, running `restore` first when it failed.
fn or_restore<T>(setup: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if setup.is_err() {
        restore();
    }
    setup
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::models::{MAX_NAME_LEN, sample_catalog};
    use catalog_core::table::TabularViewModel;

    fn app() -> App {
        let state = AppState::new(TabularViewModel::for_record());
        let mut app = App::new(ProductStore::new(sample_catalog()), state);
        app.refresh();
        app
    }

    #[test]
    fn refresh_loads_records_once_per_revision() {
        let mut app = app();
        assert_eq!(app.state().table.records().len(), sample_catalog().len());
        app.state.table.set_records(Vec::new());
        app.refresh();
        // Revision unchanged: no refetch.
        assert!(app.state().table.records().is_empty());
    }

    #[test]
    fn delete_refreshes_table() {
        let mut app = app();
        app.apply(KeyAction::Delete(3));
        assert!(app.state().table.records().iter().all(|p| p.id != 3));
        assert_eq!(app.state().status.as_deref(), Some("Deleted \"Chair\""));
    }

    #[test]
    fn stock_cannot_go_negative() {
        let mut app = app();
        // Chair has 0 in stock.
        app.apply(KeyAction::AdjustStock(3, -1));
        let chair = app.state().table.records().iter().find(|p| p.id == 3).unwrap();
        assert_eq!(chair.stock, 0);
        assert!(app
            .state()
            .status
            .as_deref()
            .is_some_and(|m| m.contains("stock cannot be negative")));

        app.apply(KeyAction::AdjustStock(3, 1));
        let chair = app.state().table.records().iter().find(|p| p.id == 3).unwrap();
        assert_eq!(chair.stock, 1);
    }

    #[test]
    fn duplicate_creates_and_tracks_new_product() {
        let mut app = app();
        let before = app.state().table.records().len();
        app.apply(KeyAction::Duplicate(1));
        let records = app.state().table.records();
        assert_eq!(records.len(), before + 1);
        let copy = records.last().unwrap();
        assert_eq!(copy.name, "Desk (copy)");
        assert_eq!(app.state().tracked_id, Some(copy.id));
    }

    #[test]
    fn unknown_id_reports_not_found() {
        let mut app = app();
        app.apply(KeyAction::Delete(999));
        assert_eq!(app.state().status.as_deref(), Some("Product 999 not found"));
    }

    #[test]
    fn deleting_from_detail_closes_popup() {
        let mut app = app();
        app.state.popup = PopupState::Detail { id: 2 };
        app.apply(KeyAction::Delete(2));
        assert_eq!(app.state().popup, PopupState::None);
    }

    #[test]
    fn duplicate_of_long_name_is_rejected() {
        let mut long = sample_catalog().remove(0);
        long.name = "x".repeat(MAX_NAME_LEN - 2);
        let id = long.id;
        let state = AppState::new(TabularViewModel::for_record());
        let mut app = App::new(ProductStore::new(vec![long]), state);
        app.refresh();

        app.apply(KeyAction::Duplicate(id));
        assert_eq!(app.state().table.records().len(), 1);
        let status = app.state().status.clone().unwrap_or_default();
        assert!(status.starts_with("Invalid product: name must be at most"), "{}", status);
    }

    #[test]
    fn failed_setup_restores_terminal() {
        let mut restored = false;
        let err = or_restore::<()>(Err(io::Error::other("no tty")), || restored = true);
        assert!(err.is_err());
        assert!(restored);

        let mut restored = false;
        assert_eq!(or_restore(Ok(7), || restored = true).unwrap(), 7);
        assert!(!restored);
    }

    #[test]
    fn quit_action_stops_loop() {
        let mut app = app();
        app.apply(KeyAction::Quit);
        assert!(app.should_quit);
    }
}
