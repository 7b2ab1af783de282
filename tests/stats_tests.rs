//! Stats pane tests
//!
//! Exercises the per-code state machine: re-fetch on every entry, the
//! loading/loaded/not-found transitions, and the (code, seq) guard that
//! drops responses arriving after navigation.

use tinylink_tui::api::LinkSummary;
use tinylink_tui::errors::TinylinkError;
use tinylink_tui::store::{StatsPane, StatsState};

fn detail(code: &str, clicks: u64) -> LinkSummary {
    LinkSummary {
        code: code.to_string(),
        url: "https://a.com".to_string(),
        clicks,
        last_clicked: None,
        short_url: None,
    }
}

#[test]
fn test_open_enters_loading() {
    let mut pane = StatsPane::default();
    pane.open("promo");
    assert_eq!(pane.code(), Some("promo"));
    assert_eq!(pane.state(), Some(&StatsState::Loading));
}

#[test]
fn test_successful_fetch_loads_detail() {
    let mut pane = StatsPane::default();
    let seq = pane.open("promo");
    assert!(pane.apply("promo", seq, Ok(detail("promo", 7))));
    assert_eq!(pane.state(), Some(&StatsState::Loaded(detail("promo", 7))));
}

#[test]
fn test_unknown_code_renders_not_found() {
    let mut pane = StatsPane::default();
    let seq = pane.open("ghost123");
    assert!(pane.apply("ghost123", seq, Err(TinylinkError::not_found("no such code"))));
    assert_eq!(pane.state(), Some(&StatsState::NotFound));
}

#[test]
fn test_network_failure_also_renders_not_found() {
    // The user-facing message does not distinguish missing from broken.
    let mut pane = StatsPane::default();
    let seq = pane.open("promo");
    assert!(pane.apply("promo", seq, Err(TinylinkError::network("connection refused"))));
    assert_eq!(pane.state(), Some(&StatsState::NotFound));
}

#[test]
fn test_late_response_after_close_is_dropped() {
    let mut pane = StatsPane::default();
    let seq = pane.open("promo");
    pane.close();

    assert!(!pane.apply("promo", seq, Ok(detail("promo", 7))));
    assert!(pane.state().is_none());
    assert!(pane.code().is_none());
}

#[test]
fn test_response_for_previous_code_is_dropped() {
    let mut pane = StatsPane::default();
    let old_seq = pane.open("first");
    let new_seq = pane.open("second");

    // The fetch for the code navigated away from resolves late.
    assert!(!pane.apply("first", old_seq, Ok(detail("first", 3))));
    assert_eq!(pane.code(), Some("second"));
    assert_eq!(pane.state(), Some(&StatsState::Loading));

    assert!(pane.apply("second", new_seq, Ok(detail("second", 5))));
    assert_eq!(pane.state(), Some(&StatsState::Loaded(detail("second", 5))));
}

#[test]
fn test_reentry_for_same_code_restarts_fetch() {
    let mut pane = StatsPane::default();
    let first_seq = pane.open("promo");
    assert!(pane.apply("promo", first_seq, Ok(detail("promo", 1))));

    // Revisiting is never served from a cache.
    let second_seq = pane.open("promo");
    assert_eq!(pane.state(), Some(&StatsState::Loading));

    // The superseded fetch cannot resurface...
    assert!(!pane.apply("promo", first_seq, Ok(detail("promo", 1))));
    assert_eq!(pane.state(), Some(&StatsState::Loading));

    // ...only the fresh one lands.
    assert!(pane.apply("promo", second_seq, Ok(detail("promo", 2))));
    assert_eq!(pane.state(), Some(&StatsState::Loaded(detail("promo", 2))));
}
