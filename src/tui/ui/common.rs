use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::tui::app::{App, CurrentScreen};

/// Draw title bar with version and link count.
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title_text = vec![Line::from(vec![
        Span::styled("TinyLink Dashboard", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} total links ", app.store.len()),
            Style::default().fg(Color::Yellow),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar.
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default().fg(Color::White).bg(Color::Red).bold(),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[OK] {}", app.status_message),
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        )
    } else if app.store.is_submitting() {
        (
            "Creating link...".to_string(),
            Style::default().fg(Color::Yellow),
        )
    } else if app.store.is_loading() {
        (
            "Loading links...".to_string(),
            Style::default().fg(Color::Yellow),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(Color::Cyan))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts.
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.current_screen {
        CurrentScreen::Dashboard => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("Enter", "Stats", Color::Cyan),
            ("a", "Add", Color::Green),
            ("y", "Copy", Color::Yellow),
            ("d", "Delete", Color::Red),
            ("r", "Reload", Color::Magenta),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::AddLink => vec![
            ("Tab", "Switch Field", Color::Cyan),
            ("Enter", "Create", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::DeleteConfirm | CurrentScreen::Exiting => {
            vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)]
        }
        CurrentScreen::Stats => vec![
            ("r", "Refresh", Color::Green),
            ("Esc", "Back", Color::Red),
        ],
        CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(footer, area);
}

/// Centered sub-rectangle sized as percentages of `r`, used for popups.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
