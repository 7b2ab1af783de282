use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::tui::app::{App, EditingField};
use crate::tui::constants::popup;

use super::common::centered_rect;

pub fn draw_add_link_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let popup_area = centered_rect(popup::ADD_LINK.width, popup::ADD_LINK.height, area);

    // Shadow effect
    let shadow = Block::default().style(Style::default().bg(Color::Black));
    frame.render_widget(shadow, popup_area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title("Create Short Link")
        .title_style(Style::default().fg(Color::Green).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(block, popup_area);

    let inner_area = popup_area.inner(Margin::new(2, 1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Long URL
            Constraint::Length(3), // Custom code
            Constraint::Length(2), // Error line
            Constraint::Length(1), // Submit hint
        ])
        .split(inner_area);

    let url_style = if app.form.editing == EditingField::TargetUrl {
        Style::default().fg(Color::Black).bg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White)
    };

    let url_title = if app.form.url.is_empty() {
        format!("{} *", EditingField::TargetUrl.display_title())
    } else {
        format!(
            "{} ({} chars)",
            EditingField::TargetUrl.display_title(),
            app.form.url.len()
        )
    };

    let url_input = Paragraph::new(&*app.form.url).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(url_title)
            .border_style(url_style),
    );
    frame.render_widget(url_input, chunks[0]);

    let code_style = if app.form.editing == EditingField::ShortCode {
        Style::default().fg(Color::Black).bg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White)
    };

    let code_title = if app.form.code.is_empty() {
        format!("{} (empty = assigned)", EditingField::ShortCode.display_title())
    } else {
        EditingField::ShortCode.display_title().to_string()
    };

    let code_input = Paragraph::new(&*app.form.code).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(code_title)
            .border_style(code_style),
    );
    frame.render_widget(code_input, chunks[1]);

    if let Some(error) = &app.form.error {
        let error_text = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(error_text, chunks[2]);
    }

    let hint = if app.store.is_submitting() {
        Line::from(vec![Span::styled(
            "Creating...",
            Style::default().fg(Color::Yellow).bold(),
        )])
    } else {
        Line::from(vec![Span::styled(
            "[Enter] Create  [Tab] Switch field  [Esc] Cancel",
            Style::default().fg(Color::DarkGray),
        )])
    };
    frame.render_widget(Paragraph::new(hint), chunks[3]);
}
