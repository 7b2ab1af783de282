//! Logging system initialization.
//!
//! The TUI owns the terminal for the lifetime of the process, so log
//! output must never reach stdout/stderr: when `TINYLINK_LOG_FILE` is
//! configured, records are appended there through a non-blocking writer;
//! without it, records are discarded.
//!
//! The returned `WorkerGuard` must be kept alive for the duration of the
//! program so buffered writes are flushed on exit.

use tracing_appender::non_blocking::WorkerGuard;

use crate::config::Config;

/// Call once during startup, after configuration has been loaded and
/// before the terminal is put into raw mode.
pub fn init(config: &Config) -> WorkerGuard {
    let writer: Box<dyn std::io::Write + Send + Sync> = match &config.log_file {
        Some(path) => match std::fs::OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Box::new(file),
            // An unwritable log path must not keep the dashboard from
            // starting; the terminal is about to be taken over anyway.
            Err(_) => Box::new(std::io::sink()),
        },
        None => Box::new(std::io::sink()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.log_level.clone());

    tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(false)
        .init();

    guard
}
