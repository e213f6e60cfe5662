//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::config::PickerKind;

use super::Action;

/// Handle a key press and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    // Help popup swallows everything except its own toggles
    if app.show_help {
        return match key.code {
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => Action::ToggleHelp,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::ToggleHelp,

        KeyCode::Char('1') => Action::OpenPicker(PickerKind::Time),
        KeyCode::Char('2') => Action::OpenPicker(PickerKind::Month),
        KeyCode::Char('3') => Action::OpenPicker(PickerKind::Year),

        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Action::FocusNext,
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Action::FocusPrev,

        KeyCode::Down | KeyCode::Char('j') => Action::Step(1),
        KeyCode::Up | KeyCode::Char('k') => Action::Step(-1),
        KeyCode::PageDown => Action::Step(5),
        KeyCode::PageUp => Action::Step(-5),

        KeyCode::Enter => Action::Save,
        KeyCode::Char('r') => Action::Reset,

        _ => Action::None,
    }
}
