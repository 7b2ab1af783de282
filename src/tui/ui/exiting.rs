use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::tui::constants::popup;

use super::common::centered_rect;

pub fn draw_exiting_screen(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(popup::EXITING.width, popup::EXITING.height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title("Quit")
        .title_style(Style::default().fg(Color::Yellow).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow));
    frame.render_widget(block, popup_area);

    let inner_area = popup_area.inner(Margin::new(2, 1));

    let text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "Leave the dashboard?",
            Style::default().fg(Color::White).bold(),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(Color::Green).bold()),
            Span::styled(" Yes   ", Style::default().fg(Color::White)),
            Span::styled("[n]", Style::default().fg(Color::Red).bold()),
            Span::styled(" No", Style::default().fg(Color::White)),
        ]),
    ];

    let paragraph =
        Paragraph::new(text).alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(paragraph, inner_area);
}
