//! TinyLink TUI - a terminal dashboard for the TinyLink URL shortener
//!
//! The backend service owns the short links themselves (code generation,
//! redirects, click counting, persistence); this crate is a client that
//! talks to it over its REST API and renders a management dashboard in
//! the terminal.
//!
//! # Architecture
//! - `api`: HTTP client for the backend REST contract
//! - `store`: session-local link list and per-code stats state machines
//! - `tui`: ratatui screens and the event loop
//! - `config`: environment-backed startup configuration
//! - `errors`: crate-wide error taxonomy
//! - `logging`: tracing initialization (file-backed; the TUI owns the
//!   terminal)

pub mod api;
pub mod config;
pub mod errors;
pub mod logging;
pub mod store;
pub mod tui;
