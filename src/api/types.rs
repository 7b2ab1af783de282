//! Wire types for the backend REST contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One link as the backend reports it.
///
/// `clicks` and `last_clicked` are owned by the backend; the dashboard
/// never computes them locally, it only re-fetches. `short_url` is
/// optional: when the backend leaves it out, the public address is
/// derived from the configured short base and the code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSummary {
    pub code: String,
    pub url: String,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub last_clicked: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
}

/// Per-code lookup result; the backend returns the same shape as a list
/// item, fetched individually.
pub type LinkDetail = LinkSummary;

/// Body for `POST /api/links`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateLinkRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl CreateLinkRequest {
    /// Builds the request from raw form input. Both fields are trimmed;
    /// an empty custom code collapses to "let the backend pick one".
    pub fn new(url: &str, code: &str) -> CreateLinkRequest {
        let code = code.trim();
        CreateLinkRequest {
            url: url.trim().to_string(),
            code: if code.is_empty() {
                None
            } else {
                Some(code.to_string())
            },
        }
    }
}
