//! Per-code detail state for the stats screen.

use crate::api::LinkDetail;
use crate::errors::Result;

/// Detail-fetch state for the code the screen is keyed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsState {
    Loading,
    Loaded(LinkDetail),
    /// Any fetch failure renders as "not found"; the reason (missing
    /// code vs transport) is not distinguished to the user.
    NotFound,
}

/// State machine for the stats screen.
///
/// Every entry — including re-entry for the same code — starts a fresh
/// fetch; nothing is cached across navigations. Each fetch is tagged
/// with the code and a sequence number taken at dispatch time, and a
/// completion is applied only while both still match, so a late response
/// arriving after the screen was closed or re-keyed is discarded.
#[derive(Debug, Default)]
pub struct StatsPane {
    active: Option<Active>,
    seq: u64,
}

#[derive(Debug)]
struct Active {
    code: String,
    seq: u64,
    state: StatsState,
}

impl StatsPane {
    /// Enter (or re-enter) the screen for `code`. Returns the tag the
    /// fetch completion must carry.
    pub fn open(&mut self, code: impl Into<String>) -> u64 {
        self.seq += 1;
        self.active = Some(Active {
            code: code.into(),
            seq: self.seq,
            state: StatsState::Loading,
        });
        self.seq
    }

    /// Leave the screen; anything still in flight becomes stale.
    pub fn close(&mut self) {
        self.active = None;
    }

    /// The code the screen is currently keyed on.
    pub fn code(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.code.as_str())
    }

    pub fn state(&self) -> Option<&StatsState> {
        self.active.as_ref().map(|active| &active.state)
    }

    /// Apply a finished fetch. Returns `false` when the completion was
    /// stale and therefore dropped.
    pub fn apply(&mut self, code: &str, seq: u64, result: Result<LinkDetail>) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if active.seq != seq || active.code != code {
            return false;
        }
        active.state = match result {
            Ok(detail) => StatsState::Loaded(detail),
            Err(_) => StatsState::NotFound,
        };
        true
    }
}
