//! Completions of in-flight backend calls.
//!
//! Every network operation runs on its own tokio task and reports back
//! through one channel; the event loop drains the channel between frames
//! and applies each completion to the app state. Load and stats
//! completions carry the tag issued at dispatch time so stale responses
//! can be dropped before they touch anything.

use crate::api::{LinkDetail, LinkSummary};
use crate::errors::Result;

#[derive(Debug)]
pub enum Action {
    /// `list_links` finished for the load tagged `seq`.
    LinksLoaded {
        seq: u64,
        result: Result<Vec<LinkSummary>>,
    },
    /// The single in-flight create finished.
    CreateFinished { result: Result<LinkSummary> },
    /// A delete finished for `code`.
    DeleteFinished { code: String, result: Result<()> },
    /// `get_link` finished for the stats fetch tagged `(code, seq)`.
    StatsLoaded {
        code: String,
        seq: u64,
        result: Result<LinkDetail>,
    },
}
