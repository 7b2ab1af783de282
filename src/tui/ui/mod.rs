// UI submodules
mod add_link;
mod common;
mod dashboard;
mod delete_confirm;
mod exiting;
mod help;
mod stats;

pub use common::{centered_rect, draw_footer, draw_status_bar, draw_title_bar};

pub use add_link::draw_add_link_screen;
pub use dashboard::draw_dashboard_screen;
pub use delete_confirm::draw_delete_confirm_screen;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use stats::draw_stats_screen;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::{App, CurrentScreen};

/// Main UI rendering entry point.
pub fn ui(frame: &mut Frame, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    match app.current_screen {
        CurrentScreen::Dashboard => draw_dashboard_screen(frame, app, main_chunks[1]),
        CurrentScreen::AddLink => draw_add_link_screen(frame, app, main_chunks[1]),
        CurrentScreen::DeleteConfirm => draw_delete_confirm_screen(frame, app, main_chunks[1]),
        CurrentScreen::Stats => draw_stats_screen(frame, app, main_chunks[1]),
        CurrentScreen::Help => draw_help_screen(frame, main_chunks[1]),
        CurrentScreen::Exiting => draw_exiting_screen(frame, main_chunks[1]),
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}
