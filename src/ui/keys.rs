//! Keyboard dispatch for the terminal page.
//!
//! [`handle_key`] maps one key event onto [`App`] operations. It is kept
//! apart from the event loop so the bindings can be exercised without a
//! terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, FocusPane};

/// What the event loop has to do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
    /// The theme changed and should be persisted.
    ThemeChanged,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> KeyOutcome {
    if key.kind == KeyEventKind::Release {
        return KeyOutcome::Ignored;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Bindings that work regardless of focus
    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            return KeyOutcome::Handled;
        }
        KeyCode::Char('l') if ctrl => {
            app.clear();
            return KeyOutcome::Handled;
        }
        KeyCode::Char('t') if ctrl => {
            app.cycle_theme();
            return KeyOutcome::ThemeChanged;
        }
        KeyCode::Esc => {
            app.should_quit = true;
            return KeyOutcome::Handled;
        }
        KeyCode::Enter => {
            app.apply_filters();
            return KeyOutcome::Handled;
        }
        KeyCode::Tab => {
            app.toggle_focus();
            return KeyOutcome::Handled;
        }
        KeyCode::BackTab => {
            app.toggle_focus_back();
            return KeyOutcome::Handled;
        }
        _ => {}
    }

    if app.focus == FocusPane::Search {
        return match key.code {
            KeyCode::Backspace => {
                app.search_pop_char();
                KeyOutcome::Handled
            }
            KeyCode::Char(c) if !ctrl => {
                app.search_push_char(c);
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        };
    }

    match (app.focus, key.code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('c')) => app.clear(),
        (FocusPane::Company, KeyCode::Right | KeyCode::Char('l')) => app.next_company(),
        (FocusPane::Company, KeyCode::Left | KeyCode::Char('h')) => app.previous_company(),
        (FocusPane::Role, KeyCode::Right | KeyCode::Char('l')) => app.next_role(),
        (FocusPane::Role, KeyCode::Left | KeyCode::Char('h')) => app.previous_role(),
        (FocusPane::Results, KeyCode::Down | KeyCode::Char('j')) => app.next(),
        (FocusPane::Results, KeyCode::Up | KeyCode::Char('k')) => app.previous(),
        (FocusPane::Results, KeyCode::Char('r')) => app.toggle_raw(),
        _ => return KeyOutcome::Ignored,
    }
    KeyOutcome::Handled
}
