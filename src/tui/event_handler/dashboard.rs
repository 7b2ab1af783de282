//! Event handlers for the dashboard and its popups.

use std::time::Instant;

use ratatui::crossterm::event::KeyCode;

use crate::tui::app::{App, CurrentScreen};

/// Handle dashboard (link table) input.
pub fn handle_dashboard(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::Esc => app.clear_messages(),
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.form.clear();
            app.current_screen = CurrentScreen::AddLink;
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            if app.selected_link().is_some() {
                app.current_screen = CurrentScreen::DeleteConfirm;
            }
        }
        KeyCode::Enter | KeyCode::Char('v') | KeyCode::Char('V') => {
            if let Some(link) = app.selected_link() {
                let code = link.code.clone();
                app.open_stats(code);
            }
        }
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('c') => copy_selected(app),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reload_links(),
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        _ => {}
    }
    false
}

/// Copy the selected link's public short URL to the system clipboard and
/// mark the row for the copy-indicator window.
fn copy_selected(app: &mut App) {
    let Some(link) = app.selected_link() else {
        return;
    };
    let short = app.store.short_url(link);
    let code = link.code.clone();

    if let Ok(mut clipboard) = arboard::Clipboard::new()
        && clipboard.set_text(short.clone()).is_ok()
    {
        app.store.mark_copied(code, Instant::now());
        app.set_status(format!("Copied {}", short));
    } else {
        app.set_error("Clipboard unavailable".to_string());
    }
}

/// Handle create-popup input. While a create is in flight the whole form
/// is inert; the submit either completes or fails through its `Action`.
pub fn handle_add_link(app: &mut App, key_code: KeyCode) -> bool {
    if app.store.is_submitting() {
        return false;
    }
    match key_code {
        KeyCode::Enter => app.submit_create(),
        KeyCode::Esc => {
            app.form.clear();
            app.current_screen = CurrentScreen::Dashboard;
        }
        KeyCode::Tab => app.form.toggle_field(),
        KeyCode::Backspace => app.form.pop_char(),
        KeyCode::Char(c) => app.form.push_char(c),
        _ => {}
    }
    false
}

/// Handle delete-confirmation input. Confirming dispatches the delete
/// and immediately returns to the dashboard; the row disappears only
/// when the backend acknowledges.
pub fn handle_delete_confirm(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(link) = app.selected_link() {
                let code = link.code.clone();
                app.dispatch_delete(code);
            }
            app.current_screen = CurrentScreen::Dashboard;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Dashboard;
        }
        _ => {}
    }
    false
}
