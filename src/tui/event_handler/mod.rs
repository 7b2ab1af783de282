//! Event handling for the TUI.
//!
//! Delegates keyboard input to the handler for the current screen:
//! - dashboard: Dashboard, AddLink, DeleteConfirm
//! - misc: Stats, Help, Exiting

use ratatui::crossterm::event::KeyCode;

use super::app::{App, CurrentScreen};

mod dashboard;
mod misc;

use dashboard::*;
use misc::*;

/// Handle keyboard input based on the current screen. Returns `true`
/// when the application should exit.
pub fn handle_key_event(app: &mut App, key_code: KeyCode) -> bool {
    match app.current_screen {
        CurrentScreen::Dashboard => handle_dashboard(app, key_code),
        CurrentScreen::AddLink => handle_add_link(app, key_code),
        CurrentScreen::DeleteConfirm => handle_delete_confirm(app, key_code),
        CurrentScreen::Stats => handle_stats(app, key_code),
        CurrentScreen::Help => handle_help(app, key_code),
        CurrentScreen::Exiting => handle_exiting(app, key_code),
    }
}
