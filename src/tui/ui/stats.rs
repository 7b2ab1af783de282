//! Stats screen for a single code.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::api::LinkDetail;
use crate::store::StatsState;
use crate::tui::app::App;

pub fn draw_stats_screen(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.stats.code() {
        Some(code) => format!("Stats for {}", code),
        None => "Stats".to_string(),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = match app.stats.state() {
        Some(StatsState::Loading) => vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Loading...",
                Style::default().fg(Color::Gray),
            )]),
        ],
        Some(StatsState::Loaded(detail)) => detail_lines(app, detail),
        Some(StatsState::NotFound) | None => vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Not found",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    "[Esc]",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to go back", Style::default().fg(Color::DarkGray)),
            ]),
        ],
    };

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn detail_lines<'a>(app: &'a App, detail: &'a LinkDetail) -> Vec<Line<'a>> {
    let last_clicked = detail
        .last_clicked
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Code:          ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                &detail.code,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Short URL:     ", Style::default().fg(Color::DarkGray)),
            Span::styled(app.store.short_url(detail), Style::default().fg(Color::Blue)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Target URL:    ",
            Style::default().fg(Color::DarkGray),
        )]),
        Line::from(vec![Span::styled(
            &detail.url,
            Style::default().fg(Color::Blue),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Clicks:        ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", detail.clicks),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Last Clicked:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(last_clicked, Style::default().fg(Color::White)),
        ]),
    ]
}
