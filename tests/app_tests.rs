//! App-level tests
//!
//! Drives the TUI application state through the same `Action`
//! completions the request tasks produce, with a stub API client in
//! place of the network. Covers the create form lifecycle, delete
//! reporting, and stale-completion handling at the app boundary.

use std::sync::Arc;

use async_trait::async_trait;

use tinylink_tui::api::{CreateLinkRequest, LinkApi, LinkDetail, LinkSummary};
use tinylink_tui::config::Config;
use tinylink_tui::errors::{Result, TinylinkError};
use tinylink_tui::tui::action::Action;
use tinylink_tui::tui::app::{App, CurrentScreen};

/// API stand-in: every call fails generically. App tests feed synthetic
/// completions through `apply`, so these results are never observed.
struct StubApi;

#[async_trait]
impl LinkApi for StubApi {
    async fn list_links(&self) -> Result<Vec<LinkSummary>> {
        Err(TinylinkError::request("stub"))
    }

    async fn create_link(&self, _req: CreateLinkRequest) -> Result<LinkSummary> {
        Err(TinylinkError::request("stub"))
    }

    async fn delete_link(&self, _code: &str) -> Result<()> {
        Err(TinylinkError::request("stub"))
    }

    async fn get_link(&self, _code: &str) -> Result<LinkDetail> {
        Err(TinylinkError::request("stub"))
    }
}

fn test_config() -> Config {
    Config {
        api_base: "http://localhost:4000".to_string(),
        short_base: "http://localhost:4000".to_string(),
        log_level: "info".to_string(),
        log_file: None,
    }
}

fn link(code: &str, url: &str) -> LinkSummary {
    LinkSummary {
        code: code.to_string(),
        url: url.to_string(),
        clicks: 0,
        last_clicked: None,
        short_url: None,
    }
}

/// An app whose initial load (tag 1) has completed with `links`.
fn app_with_links(links: Vec<LinkSummary>) -> App {
    let mut app = App::new(Arc::new(StubApi), &test_config());
    app.apply(Action::LinksLoaded {
        seq: 1,
        result: Ok(links),
    });
    app
}

// =============================================================================
// Create flow
// =============================================================================

#[tokio::test]
async fn test_create_success_prepends_clears_form_and_returns_to_dashboard() {
    let mut app = app_with_links(vec![link("old", "https://old.com")]);
    app.current_screen = CurrentScreen::AddLink;
    app.form.url = "https://a.com".to_string();
    app.form.code = "promo".to_string();

    app.submit_create();
    assert!(app.store.is_submitting());

    app.apply(Action::CreateFinished {
        result: Ok(link("promo", "https://a.com")),
    });

    assert_eq!(app.current_screen, CurrentScreen::Dashboard);
    assert!(app.form.url.is_empty());
    assert!(app.form.code.is_empty());
    assert!(app.form.error.is_none());
    assert_eq!(app.store.links()[0].code, "promo");
    assert_eq!(app.store.links()[0].clicks, 0);
    assert!(app.store.links()[0].last_clicked.is_none());
    assert!(app.status_message.contains("promo"));
    assert!(!app.store.is_submitting());
}

#[tokio::test]
async fn test_create_conflict_keeps_form_open_with_duplicate_message() {
    let mut app = app_with_links(vec![link("promo", "https://a.com")]);
    app.current_screen = CurrentScreen::AddLink;
    app.form.url = "https://b.com".to_string();
    app.form.code = "promo".to_string();

    app.submit_create();
    app.apply(Action::CreateFinished {
        result: Err(TinylinkError::conflict("code 'promo' is taken")),
    });

    assert_eq!(app.current_screen, CurrentScreen::AddLink);
    assert_eq!(app.form.error.as_deref(), Some("Code already exists"));
    assert_eq!(app.form.url, "https://b.com");
    assert_eq!(app.store.len(), 1);
    assert!(!app.store.is_submitting());
}

#[tokio::test]
async fn test_create_generic_failure_reports_generically() {
    let mut app = app_with_links(vec![]);
    app.current_screen = CurrentScreen::AddLink;
    app.form.url = "https://a.com".to_string();

    app.submit_create();
    app.apply(Action::CreateFinished {
        result: Err(TinylinkError::request("backend returned 500")),
    });

    assert_eq!(app.form.error.as_deref(), Some("Create failed"));
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_submit_rejects_blank_url_without_dispatch() {
    let mut app = app_with_links(vec![]);
    app.current_screen = CurrentScreen::AddLink;
    app.form.url = "   ".to_string();

    app.submit_create();

    assert!(!app.store.is_submitting());
    assert!(app.form.error.is_some());
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_ignored() {
    let mut app = app_with_links(vec![]);
    app.current_screen = CurrentScreen::AddLink;
    app.form.url = "https://a.com".to_string();

    app.submit_create();
    assert!(app.store.is_submitting());

    app.submit_create();
    assert!(app.store.is_submitting());

    // The single completion settles the single create.
    app.apply(Action::CreateFinished {
        result: Ok(link("x", "https://a.com")),
    });
    assert!(!app.store.is_submitting());
    assert_eq!(app.store.len(), 1);
}

// =============================================================================
// Delete flow
// =============================================================================

#[tokio::test]
async fn test_delete_success_removes_entry_and_reports() {
    let mut app = app_with_links(vec![link("a", "https://a.com"), link("b", "https://b.com")]);

    app.apply(Action::DeleteFinished {
        code: "a".to_string(),
        result: Ok(()),
    });

    let codes: Vec<&str> = app.store.links().iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, vec!["b"]);
    assert!(app.status_message.contains("a"));
}

#[tokio::test]
async fn test_delete_failure_keeps_entry_and_surfaces_notice() {
    let mut app = app_with_links(vec![link("a", "https://a.com")]);

    app.apply(Action::DeleteFinished {
        code: "a".to_string(),
        result: Err(TinylinkError::request("backend returned 500")),
    });

    assert_eq!(app.store.len(), 1);
    assert!(app.error_message.contains("a"));
    assert!(app.status_message.is_empty());
}

#[tokio::test]
async fn test_selection_clamps_when_last_entry_is_deleted() {
    let mut app = app_with_links(vec![link("a", "https://a.com"), link("b", "https://b.com")]);
    app.jump_to_bottom();
    assert_eq!(app.selected_index, 1);

    app.apply(Action::DeleteFinished {
        code: "b".to_string(),
        result: Ok(()),
    });

    assert_eq!(app.selected_index, 0);
    assert_eq!(app.selected_link().map(|l| l.code.as_str()), Some("a"));
}

// =============================================================================
// Stale completions
// =============================================================================

#[tokio::test]
async fn test_stale_list_load_does_not_touch_state() {
    let mut app = app_with_links(vec![link("a", "https://a.com")]);

    // A completion from a load that was superseded long ago.
    app.apply(Action::LinksLoaded {
        seq: 999,
        result: Ok(vec![link("zombie", "https://z.com")]),
    });

    assert_eq!(app.store.len(), 1);
    assert_eq!(app.store.links()[0].code, "a");
}

#[tokio::test]
async fn test_stats_completion_after_leaving_screen_is_dropped() {
    let mut app = app_with_links(vec![link("a", "https://a.com")]);

    let seq = app.stats.open("a");
    app.stats.close();

    app.apply(Action::StatsLoaded {
        code: "a".to_string(),
        seq,
        result: Ok(link("a", "https://a.com")),
    });

    assert!(app.stats.state().is_none());
}
