//! Request dispatch.
//!
//! Each method starts one backend call on its own tokio task; the result
//! comes back as an `Action` on the app channel. Nothing blocks the
//! event loop, and deletes of distinct codes may overlap freely.

use std::sync::Arc;

use crate::api::CreateLinkRequest;
use crate::tui::action::Action;

use super::{App, CurrentScreen};

impl App {
    /// Start (or restart) the list load. An earlier load still in flight
    /// becomes stale and its completion will be dropped.
    pub fn reload_links(&mut self) {
        let seq = self.store.begin_load();
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.list_links().await;
            let _ = tx.send(Action::LinksLoaded { seq, result });
        });
    }

    /// Validate and dispatch the create form. At most one create is in
    /// flight; while it is, further submits are ignored.
    pub fn submit_create(&mut self) {
        if let Err(msg) = self.form.validate() {
            self.form.error = Some(msg);
            return;
        }
        if !self.store.begin_create() {
            return;
        }
        self.form.error = None;

        let req = CreateLinkRequest::new(&self.form.url, &self.form.code);
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.create_link(req).await;
            let _ = tx.send(Action::CreateFinished { result });
        });
    }

    /// Dispatch a confirmed delete. The entry leaves the list only when
    /// the backend acknowledges.
    pub fn dispatch_delete(&mut self, code: String) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.delete_link(&code).await;
            let _ = tx.send(Action::DeleteFinished { code, result });
        });
    }

    /// Switch to the stats screen for `code` and fetch its detail
    /// record. Re-entry for the same code fetches again.
    pub fn open_stats(&mut self, code: String) {
        let seq = self.stats.open(code.clone());
        self.current_screen = CurrentScreen::Stats;

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.get_link(&code).await;
            let _ = tx.send(Action::StatsLoaded { code, seq, result });
        });
    }
}
