//! Event handlers for the stats, help and exit screens.

use ratatui::crossterm::event::KeyCode;

use crate::tui::app::{App, CurrentScreen};

/// Handle stats-screen input. Leaving the screen invalidates whatever
/// fetch may still be in flight.
pub fn handle_stats(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Backspace => {
            app.stats.close();
            app.current_screen = CurrentScreen::Dashboard;
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if let Some(code) = app.stats.code().map(str::to_string) {
                app.open_stats(code);
            }
        }
        _ => {}
    }
    false
}

pub fn handle_help(app: &mut App, key_code: KeyCode) -> bool {
    if matches!(
        key_code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('?')
    ) {
        app.current_screen = CurrentScreen::Dashboard;
    }
    false
}

pub fn handle_exiting(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => return true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Dashboard;
        }
        _ => {}
    }
    false
}
