//! Session-local link list state.
//!
//! The store owns the dashboard's in-memory list and the state machines
//! around it: list loading, the create-submit guard, the copy indicator
//! and the short-URL derivation. It performs no I/O of its own — callers
//! begin an operation (receiving a sequence tag where one is needed),
//! run the API call elsewhere, and feed the completion back through an
//! `apply_*` reducer. A completion carrying a stale tag is dropped, so
//! overlapping reloads and responses arriving after navigation can never
//! clobber current state.

mod stats;

pub use stats::{StatsPane, StatsState};

use std::time::{Duration, Instant};

use crate::api::LinkSummary;
use crate::errors::Result;

/// How long a row stays marked after its short URL was copied.
pub const COPIED_TTL: Duration = Duration::from_secs(2);

/// List-loading state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    /// Load failed; the list is treated as empty and the user has to
    /// reload explicitly.
    Failed(String),
}

#[derive(Debug, Clone)]
struct CopiedMark {
    code: String,
    expires_at: Instant,
}

pub struct LinkStore {
    short_base: String,
    links: Vec<LinkSummary>,
    load_state: LoadState,
    load_seq: u64,
    submitting: bool,
    copied: Option<CopiedMark>,
}

impl LinkStore {
    /// `short_base` is the public prefix used when the backend does not
    /// supply a ready-made short URL.
    pub fn new(short_base: impl Into<String>) -> LinkStore {
        LinkStore {
            short_base: short_base.into(),
            links: Vec::new(),
            load_state: LoadState::Idle,
            load_seq: 0,
            submitting: false,
            copied: None,
        }
    }

    pub fn links(&self) -> &[LinkSummary] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LinkSummary> {
        self.links.get(index)
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Start (or restart) a list load. The returned tag must accompany
    /// the completion for it to be applied.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.load_state = LoadState::Loading;
        self.load_seq
    }

    /// Apply a finished list load. Returns `false` when the tag was
    /// stale (a newer load has been started since) and the completion
    /// was dropped.
    pub fn apply_loaded(&mut self, seq: u64, result: Result<Vec<LinkSummary>>) -> bool {
        if seq != self.load_seq {
            return false;
        }
        match result {
            Ok(links) => {
                self.links = links;
                self.load_state = LoadState::Loaded;
            }
            Err(err) => {
                self.links.clear();
                self.load_state = LoadState::Failed(err.format_simple());
            }
        }
        true
    }

    /// Guard for the create form: returns `false` when a create is
    /// already in flight, in which case the caller must not dispatch.
    pub fn begin_create(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Apply a finished create. On success the confirmed entry is
    /// prepended with the server-owned counters reset (`clicks` 0,
    /// `last_clicked` unset) and its code is returned; on failure the
    /// list is untouched and the error is handed back for reporting.
    pub fn apply_created(&mut self, result: Result<LinkSummary>) -> Result<String> {
        self.submitting = false;
        let created = result?;
        let code = created.code.clone();
        self.links.insert(
            0,
            LinkSummary {
                code: created.code,
                url: created.url,
                clicks: 0,
                last_clicked: None,
                short_url: created.short_url,
            },
        );
        Ok(code)
    }

    /// Apply a finished delete. Removal happens only on backend success;
    /// on failure the list is untouched and the error is handed back.
    pub fn apply_deleted(&mut self, code: &str, result: Result<()>) -> Result<()> {
        result?;
        self.links.retain(|link| link.code != code);
        Ok(())
    }

    /// Public short URL for a link: backend-provided when present,
    /// otherwise derived from the configured base. Pure — never consults
    /// the network.
    pub fn short_url(&self, link: &LinkSummary) -> String {
        match &link.short_url {
            Some(short) => short.clone(),
            None => format!("{}/{}", self.short_base, link.code),
        }
    }

    /// Mark `code` as just copied. A newer mark supersedes the previous
    /// one and restarts the window, so at most one code is marked.
    pub fn mark_copied(&mut self, code: impl Into<String>, now: Instant) {
        self.copied = Some(CopiedMark {
            code: code.into(),
            expires_at: now + COPIED_TTL,
        });
    }

    /// Code currently marked as copied, if its window has not elapsed.
    pub fn copied_code(&self, now: Instant) -> Option<&str> {
        self.copied
            .as_ref()
            .filter(|mark| now < mark.expires_at)
            .map(|mark| mark.code.as_str())
    }

    /// Drop the copied mark once its window has elapsed. Driven by the
    /// render tick.
    pub fn tick(&mut self, now: Instant) {
        if let Some(mark) = &self.copied
            && now >= mark.expires_at
        {
            self.copied = None;
        }
    }

    /// Helper for error paths that need the load failure message.
    pub fn load_error(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
