use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
};

use crate::store::LoadState;
use crate::tui::app::App;
use crate::tui::constants::URL_TRUNCATE_LENGTH;

pub fn draw_dashboard_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let state = app.store.load_state().clone();
    match state {
        LoadState::Idle | LoadState::Loading if app.store.is_empty() => {
            draw_loading(frame, area);
        }
        LoadState::Failed(message) => draw_load_error(frame, &message, area),
        _ if app.store.is_empty() => draw_empty_state(frame, area),
        _ => draw_link_table(frame, app, area),
    }
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title.to_string())
        .title_style(Style::default().fg(Color::Cyan))
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Loading your links...",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )]),
    ];
    let widget = Paragraph::new(text)
        .block(bordered("Your Links"))
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(widget, area);
}

fn draw_load_error(frame: &mut Frame, message: &str, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Failed to load links",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            message.to_string(),
            Style::default().fg(Color::DarkGray),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "[r]",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to reload", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    let widget = Paragraph::new(text)
        .block(bordered("Your Links"))
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(widget, area);
}

fn draw_empty_state(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(vec![Span::styled(
            "No links yet",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "[a]",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " to create one and get started",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];
    let widget = Paragraph::new(text)
        .block(bordered("Your Links"))
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(widget, area);
}

fn draw_link_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let copied = app
        .store
        .copied_code(Instant::now())
        .map(str::to_string);

    let header = Row::new(vec![
        Span::styled(
            "Code",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Short URL",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Target",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Clicks",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Last Clicked",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .bottom_margin(1);

    let mut rows = Vec::with_capacity(app.store.len());
    for link in app.store.links() {
        let short_cell = if copied.as_deref() == Some(link.code.as_str()) {
            Span::styled(
                "* copied to clipboard",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(app.store.short_url(link), Style::default().fg(Color::Blue))
        };

        let last_clicked = link
            .last_clicked
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());

        rows.push(Row::new(vec![
            Span::styled(
                link.code.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            short_cell,
            Span::styled(truncate(&link.url), Style::default().fg(Color::White)),
            Span::styled(format!("{}", link.clicks), Style::default().fg(Color::Green)),
            Span::styled(last_clicked, Style::default().fg(Color::DarkGray)),
        ]));
    }

    let table = Table::new(
        rows,
        [
            ratatui::layout::Constraint::Length(14),
            ratatui::layout::Constraint::Min(24),
            ratatui::layout::Constraint::Min(20),
            ratatui::layout::Constraint::Length(8),
            ratatui::layout::Constraint::Length(17),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!("Your Links ({})", app.store.len()))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("> ")
    .column_spacing(1);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

/// Truncate on a char boundary so wide targets stay on one row.
fn truncate(url: &str) -> String {
    if url.chars().count() > URL_TRUNCATE_LENGTH {
        let head: String = url.chars().take(URL_TRUNCATE_LENGTH).collect();
        format!("{}...", head)
    } else {
        url.to_string()
    }
}
