use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let entries: &[(&str, &str)] = &[
        ("Up/Down, j/k", "Move selection"),
        ("g / G", "Jump to top / bottom"),
        ("Enter, v", "View stats for the selected link"),
        ("a", "Create a new short link"),
        ("y, c", "Copy the short URL to the clipboard"),
        ("d", "Delete the selected link (asks first)"),
        ("r", "Reload the link list"),
        ("?", "This help"),
        ("q", "Quit"),
    ];

    let mut lines = vec![Line::from("")];
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<14}", key),
                Style::default().fg(Color::Yellow).bold(),
            ),
            Span::styled(*desc, Style::default().fg(Color::White)),
        ]));
        lines.push(Line::from(""));
    }

    let help = Paragraph::new(lines).block(
        Block::default()
            .title("Help")
            .title_style(Style::default().fg(Color::Cyan).bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(help, area);
}
