//! `LinkApi` over HTTP via reqwest.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::errors::{Result, TinylinkError};

use super::LinkApi;
use super::types::{CreateLinkRequest, LinkDetail, LinkSummary};

/// HTTP client for a running backend. Cheap to clone the inner client;
/// one instance is shared across all request tasks.
pub struct HttpApi {
    client: Client,
    base: String,
}

impl HttpApi {
    /// `base` is the already-normalized API base address (no trailing
    /// slash), as produced by the configuration layer.
    pub fn new(base: impl Into<String>) -> HttpApi {
        HttpApi {
            client: Client::new(),
            base: base.into(),
        }
    }

    fn links_url(&self) -> String {
        format!("{}/api/links", self.base)
    }

    fn link_url(&self, code: &str) -> String {
        format!("{}/api/links/{}", self.base, urlencoding::encode(code))
    }
}

/// Map a non-2xx status onto the error taxonomy. Only conflict and
/// not-found change caller behavior; the rest is reported generically.
fn status_error(status: StatusCode) -> TinylinkError {
    match status {
        StatusCode::CONFLICT => {
            TinylinkError::conflict(format!("backend reported a code conflict ({})", status))
        }
        StatusCode::NOT_FOUND => {
            TinylinkError::not_found(format!("backend reported no such code ({})", status))
        }
        _ => TinylinkError::request(format!("backend returned {}", status)),
    }
}

#[async_trait]
impl LinkApi for HttpApi {
    async fn list_links(&self) -> Result<Vec<LinkSummary>> {
        let resp = self.client.get(self.links_url()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(status_error(status));
        }
        let links: Vec<LinkSummary> = resp.json().await?;
        debug!(count = links.len(), "listed links");
        Ok(links)
    }

    async fn create_link(&self, req: CreateLinkRequest) -> Result<LinkSummary> {
        let resp = self.client.post(self.links_url()).json(&req).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(status_error(status));
        }
        Ok(resp.json().await?)
    }

    async fn delete_link(&self, code: &str) -> Result<()> {
        let resp = self.client.delete(self.link_url(code)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(status_error(status));
        }
        debug!(code, "deleted link");
        Ok(())
    }

    async fn get_link(&self, code: &str) -> Result<LinkDetail> {
        let resp = self.client.get(self.link_url(code)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(status_error(status));
        }
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_conflict() {
        let err = status_error(StatusCode::CONFLICT);
        assert!(matches!(err, TinylinkError::Conflict(_)));
    }

    #[test]
    fn test_status_error_not_found() {
        let err = status_error(StatusCode::NOT_FOUND);
        assert!(matches!(err, TinylinkError::NotFound(_)));
    }

    #[test]
    fn test_status_error_other_collapses_to_request() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::UNPROCESSABLE_ENTITY,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
        ] {
            let err = status_error(status);
            assert!(matches!(err, TinylinkError::Request(_)), "status {}", status);
        }
    }

    #[test]
    fn test_link_url_escapes_code() {
        let api = HttpApi::new("http://localhost:4000");
        assert_eq!(
            api.link_url("promo"),
            "http://localhost:4000/api/links/promo"
        );
        assert_eq!(
            api.link_url("a/b c"),
            "http://localhost:4000/api/links/a%2Fb%20c"
        );
    }

    #[test]
    fn test_links_url() {
        let api = HttpApi::new("https://api.example.com");
        assert_eq!(api.links_url(), "https://api.example.com/api/links");
    }
}
