//! App state definition and state management.

mod form;
mod navigation;
mod requests;

pub use form::{EditingField, FormState};

use std::sync::Arc;
use std::time::Instant;

use ratatui::widgets::TableState;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::api::{LinkApi, LinkSummary};
use crate::config::Config;
use crate::errors::TinylinkError;
use crate::store::{LinkStore, StatsPane};

use super::action::Action;

/// Current screen. `Dashboard` and `Stats` are the two navigable routes;
/// the rest are overlays reached from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Dashboard,
    AddLink,
    DeleteConfirm,
    Stats,
    Help,
    Exiting,
}

pub struct App {
    pub api: Arc<dyn LinkApi>,
    pub store: LinkStore,
    pub stats: StatsPane,
    pub current_screen: CurrentScreen,

    // Form state for the create popup
    pub form: FormState,

    // UI state
    pub selected_index: usize,
    pub table_state: TableState,
    pub status_message: String,
    pub error_message: String,

    tx: UnboundedSender<Action>,
    rx: UnboundedReceiver<Action>,
}

impl App {
    /// Builds the app and kicks off the initial list load.
    pub fn new(api: Arc<dyn LinkApi>, config: &Config) -> App {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut table_state = TableState::default();
        table_state.select(Some(0));

        let mut app = App {
            api,
            store: LinkStore::new(config.short_base.clone()),
            stats: StatsPane::default(),
            current_screen: CurrentScreen::Dashboard,
            form: FormState::new(),
            selected_index: 0,
            table_state,
            status_message: String::new(),
            error_message: String::new(),
            tx,
            rx,
        };
        app.reload_links();
        app
    }

    /// Apply every request completion that arrived since the last frame.
    pub fn drain_actions(&mut self) {
        while let Ok(action) = self.rx.try_recv() {
            self.apply(action);
        }
    }

    /// Apply one request completion to the app state.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::LinksLoaded { seq, result } => {
                if self.store.apply_loaded(seq, result) {
                    if let Some(msg) = self.store.load_error() {
                        warn!(error = msg, "link list load failed");
                    } else {
                        debug!(count = self.store.len(), "link list loaded");
                    }
                    self.clamp_selection();
                }
            }
            Action::CreateFinished { result } => match self.store.apply_created(result) {
                Ok(code) => {
                    self.form.clear();
                    self.current_screen = CurrentScreen::Dashboard;
                    self.jump_to_top();
                    self.set_status(format!("Created short link '{}'", code));
                }
                Err(TinylinkError::Conflict(_)) => {
                    self.form.error = Some("Code already exists".to_string());
                }
                Err(err) => {
                    warn!(error = %err, "create failed");
                    self.form.error = Some("Create failed".to_string());
                }
            },
            Action::DeleteFinished { code, result } => {
                match self.store.apply_deleted(&code, result) {
                    Ok(()) => {
                        self.clamp_selection();
                        self.set_status(format!("Deleted '{}'", code));
                    }
                    Err(err) => {
                        warn!(code = %code, error = %err, "delete failed");
                        self.set_error(format!("Failed to delete '{}': {}", code, err.format_simple()));
                    }
                }
            }
            Action::StatsLoaded { code, seq, result } => {
                // Stale completions (screen closed or re-keyed) fall away
                // inside the pane.
                let _ = self.stats.apply(&code, seq, result);
            }
        }
    }

    /// Expire timed UI state; called once per frame.
    pub fn tick(&mut self, now: Instant) {
        self.store.tick(now);
    }

    pub fn selected_link(&self) -> Option<&LinkSummary> {
        self.store.get(self.selected_index)
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }

    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message.clear();
    }
}
