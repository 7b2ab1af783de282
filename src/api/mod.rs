//! Client layer for the backend REST API.
//!
//! One operation per backend endpoint, nothing more: no retries, no
//! caching, no timeouts beyond the transport default. Failures are
//! surfaced immediately with just enough typing for the screens to react
//! differently where they must (conflict on create, not-found on the
//! per-code lookup); everything else collapses to a generic failure.

mod http;
mod types;

pub use http::HttpApi;
pub use types::{CreateLinkRequest, LinkDetail, LinkSummary};

use async_trait::async_trait;

use crate::errors::Result;

/// Backend operations as the store and screens consume them.
///
/// `HttpApi` is the production implementation; tests substitute their
/// own so no network is involved.
#[async_trait]
pub trait LinkApi: Send + Sync {
    /// `GET /api/links` — the full list, most recently created first.
    async fn list_links(&self) -> Result<Vec<LinkSummary>>;

    /// `POST /api/links` — create a link, optionally under a custom code.
    async fn create_link(&self, req: CreateLinkRequest) -> Result<LinkSummary>;

    /// `DELETE /api/links/{code}`.
    async fn delete_link(&self, code: &str) -> Result<()>;

    /// `GET /api/links/{code}` — the per-code detail record.
    async fn get_link(&self, code: &str) -> Result<LinkDetail>;
}
