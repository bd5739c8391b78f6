//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{AppState, InputMode, PopupState};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Delete the product.
    Delete(u64),
    /// Change the product's stock by the given amount.
    AdjustStock(u64, i64),
    /// Create a copy of the product.
    Duplicate(u64),
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }
    if state.popup.is_open() {
        return handle_popup(state, key);
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Filter => handle_filter_mode(state, key),
    }
}

fn handle_popup(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match state.popup.clone() {
        PopupState::QuitConfirm => match key.code {
            KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('y') => {
                state.popup = PopupState::None;
                KeyAction::Quit
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                state.popup = PopupState::None;
                KeyAction::None
            }
            _ => KeyAction::None,
        },
        PopupState::DeleteConfirm { id } => match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                state.popup = PopupState::None;
                KeyAction::Delete(id)
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                state.popup = PopupState::None;
                KeyAction::None
            }
            _ => KeyAction::None,
        },
        PopupState::Help { scroll } => {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    state.popup = PopupState::Help {
                        scroll: scroll.saturating_sub(1),
                    };
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    state.popup = PopupState::Help {
                        scroll: scroll.saturating_add(1),
                    };
                }
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    state.popup = PopupState::None;
                }
                _ => {}
            }
            KeyAction::None
        }
        PopupState::Detail { id } => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                state.popup = PopupState::None;
                KeyAction::None
            }
            KeyCode::Char('d') => {
                state.popup = PopupState::DeleteConfirm { id };
                KeyAction::None
            }
            KeyCode::Char('+') => KeyAction::AdjustStock(id, 1),
            KeyCode::Char('-') => KeyAction::AdjustStock(id, -1),
            _ => KeyAction::None,
        },
        PopupState::None => KeyAction::None,
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => {
            state.popup = PopupState::QuitConfirm;
            KeyAction::None
        }
        KeyCode::Char('?') => {
            state.popup = PopupState::Help { scroll: 0 };
            KeyAction::None
        }

        // Rows
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_up();
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_down();
            KeyAction::None
        }

        // Pages
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => {
            state.move_page(-1);
            KeyAction::None
        }
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => {
            state.move_page(1);
            KeyAction::None
        }
        KeyCode::Home => {
            state.first_page();
            KeyAction::None
        }
        KeyCode::End => {
            state.last_page();
            KeyAction::None
        }
        KeyCode::Char('[') => {
            state.resize_page(-1);
            KeyAction::None
        }
        KeyCode::Char(']') => {
            state.resize_page(1);
            KeyAction::None
        }

        // Sort
        KeyCode::Char('s') => {
            state.next_sort_column();
            KeyAction::None
        }
        KeyCode::Char('S') => {
            state.toggle_sort_direction();
            KeyAction::None
        }
        KeyCode::Char('x') => {
            state.table.set_sort(None, None);
            KeyAction::None
        }

        // Filters
        KeyCode::Char('/') => {
            state.begin_filter_input();
            KeyAction::None
        }
        KeyCode::Char('c') => {
            state.cycle_category();
            KeyAction::None
        }
        KeyCode::Esc => {
            state.filter_input.clear();
            state.table.clear_filters();
            KeyAction::None
        }

        // Records
        KeyCode::Enter => {
            if let Some(id) = state.selected_id() {
                state.popup = PopupState::Detail { id };
            }
            KeyAction::None
        }
        KeyCode::Char('d') => {
            if let Some(id) = state.selected_id() {
                state.popup = PopupState::DeleteConfirm { id };
            }
            KeyAction::None
        }
        KeyCode::Char('+') => state
            .selected_id()
            .map_or(KeyAction::None, |id| KeyAction::AdjustStock(id, 1)),
        KeyCode::Char('-') => state
            .selected_id()
            .map_or(KeyAction::None, |id| KeyAction::AdjustStock(id, -1)),
        KeyCode::Char('D') => state
            .selected_id()
            .map_or(KeyAction::None, KeyAction::Duplicate),

        _ => KeyAction::None,
    }
}

/// Handles keys while typing the search query. The filter is applied on
/// every keystroke.
fn handle_filter_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => state.cancel_filter_input(),
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            state.filter_input.pop();
            state.apply_filter_input();
        }
        KeyCode::Char(c) => {
            state.filter_input.push(c);
            state.apply_filter_input();
        }
        _ => {}
    }
    KeyAction::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::models::sample_catalog;
    use catalog_core::table::TabularViewModel;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn state() -> AppState {
        let mut table = TabularViewModel::for_record();
        table.set_records(sample_catalog());
        let mut state = AppState::new(table);
        state.resolve_selection(&[1, 2, 3]);
        state
    }

    fn type_str(state: &mut AppState, s: &str) {
        for c in s.chars() {
            handle_key(state, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn filter_mode_applies_on_each_keystroke() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Char('/')));
        assert_eq!(s.input_mode, InputMode::Filter);

        type_str(&mut s, "lamp");
        assert_eq!(s.table.filter().query(), "lamp");
        assert_eq!(s.table.filtered_count(), 2);

        handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.input_mode, InputMode::Normal);
        assert_eq!(s.table.filter().query(), "lamp");
    }

    #[test]
    fn filter_mode_escape_restores_previous_query() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Char('/')));
        type_str(&mut s, "desk");
        handle_key(&mut s, key(KeyCode::Esc));
        assert_eq!(s.input_mode, InputMode::Normal);
        assert!(s.table.filter().is_empty());

        handle_key(&mut s, key(KeyCode::Char('/')));
        type_str(&mut s, "lamp");
        handle_key(&mut s, key(KeyCode::Enter));

        handle_key(&mut s, key(KeyCode::Char('/')));
        assert_eq!(s.filter_input, "lamp");
        type_str(&mut s, "zzz");
        assert_eq!(s.table.filtered_count(), 0);
        handle_key(&mut s, key(KeyCode::Esc));
        assert_eq!(s.table.filter().query(), "lamp");
        assert_eq!(s.filter_input, "lamp");
        assert_eq!(s.table.filtered_count(), 2);
    }

    #[test]
    fn typing_q_in_filter_mode_does_not_quit() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Char('/')));
        let action = handle_key(&mut s, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::None);
        assert_eq!(s.popup, PopupState::None);
    }

    #[test]
    fn quit_needs_confirmation() {
        let mut s = state();
        assert_eq!(handle_key(&mut s, key(KeyCode::Char('q'))), KeyAction::None);
        assert_eq!(s.popup, PopupState::QuitConfirm);
        assert_eq!(handle_key(&mut s, key(KeyCode::Enter)), KeyAction::Quit);
    }

    #[test]
    fn ctrl_c_quits_immediately() {
        let mut s = state();
        let ev = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(handle_key(&mut s, ev), KeyAction::Quit);
    }

    #[test]
    fn delete_goes_through_confirm() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Down));
        s.resolve_selection(&[1, 2, 3]);
        handle_key(&mut s, key(KeyCode::Char('d')));
        assert_eq!(s.popup, PopupState::DeleteConfirm { id: 2 });

        assert_eq!(handle_key(&mut s, key(KeyCode::Esc)), KeyAction::None);
        assert_eq!(s.popup, PopupState::None);

        handle_key(&mut s, key(KeyCode::Char('d')));
        assert_eq!(handle_key(&mut s, key(KeyCode::Char('y'))), KeyAction::Delete(2));
    }

    #[test]
    fn stock_and_duplicate_target_selected_row() {
        let mut s = state();
        assert_eq!(
            handle_key(&mut s, key(KeyCode::Char('+'))),
            KeyAction::AdjustStock(1, 1)
        );
        assert_eq!(
            handle_key(&mut s, key(KeyCode::Char('-'))),
            KeyAction::AdjustStock(1, -1)
        );
        assert_eq!(
            handle_key(&mut s, key(KeyCode::Char('D'))),
            KeyAction::Duplicate(1)
        );
    }

    #[test]
    fn detail_popup_opens_on_enter() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.popup, PopupState::Detail { id: 1 });
        handle_key(&mut s, key(KeyCode::Esc));
        assert_eq!(s.popup, PopupState::None);
    }

    #[test]
    fn page_keys_move_pages() {
        let mut s = state();
        s.table.set_page_size(4).unwrap();
        handle_key(&mut s, key(KeyCode::Right));
        assert_eq!(s.table.page_index(), 1);
        handle_key(&mut s, key(KeyCode::End));
        assert_eq!(s.table.page_index(), 3);
        handle_key(&mut s, key(KeyCode::Home));
        assert_eq!(s.table.page_index(), 0);
        handle_key(&mut s, key(KeyCode::Left));
        assert_eq!(s.table.page_index(), 0);
    }

    #[test]
    fn escape_clears_all_filters() {
        let mut s = state();
        handle_key(&mut s, key(KeyCode::Char('c')));
        assert!(!s.table.filter().is_empty());
        handle_key(&mut s, key(KeyCode::Esc));
        assert!(s.table.filter().is_empty());
    }
}
