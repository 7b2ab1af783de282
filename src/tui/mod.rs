//! Terminal user interface.
//!
//! One event loop drives everything: keyboard input is polled with a
//! short timeout, completions of spawned request tasks are drained from
//! the app's channel between frames, and the copy-indicator window is
//! expired on every pass. All state mutation happens synchronously on
//! this loop, so the in-memory list needs no locking.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

pub mod action;
pub mod app;
mod constants;
mod event_handler;
mod ui;

use crate::api::HttpApi;
use crate::config::Config;

use app::App;
use ui::ui;

/// How long one pass waits for a key before re-rendering. Keeps the
/// copy-indicator expiry and request completions visible without input.
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the dashboard against the configured backend.
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let api = Arc::new(HttpApi::new(config.api_base.clone()));
    let mut app = App::new(api, &config);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

/// Main application loop.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>>
where
    <B as Backend>::Error: 'static,
{
    loop {
        app.drain_actions();
        app.tick(Instant::now());

        terminal.draw(|frame| ui(frame, app))?;

        if event::poll(EVENT_POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            let should_exit = event_handler::handle_key_event(app, key.code);
            if should_exit {
                return Ok(());
            }
        }
    }
}
