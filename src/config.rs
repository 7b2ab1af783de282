//! Environment-backed configuration, read once at startup.
//!
//! All knobs come from the process environment (a `.env` file is honored
//! via `dotenvy` before this module runs):
//!
//! - `TINYLINK_API_URL`: base address of the backend REST API
//! - `TINYLINK_SHORT_BASE`: public prefix for derived short URLs; falls
//!   back to the API base when unset
//! - `TINYLINK_LOG`: log filter directive (EnvFilter syntax)
//! - `TINYLINK_LOG_FILE`: log destination; logging is off without it

use url::Url;

use crate::errors::{Result, TinylinkError};

pub const DEFAULT_API_BASE: &str = "http://localhost:4000";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub short_base: String,
    pub log_level: String,
    pub log_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let api_base = normalize_base(
            lookup("TINYLINK_API_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        )?;

        let short_base = match lookup("TINYLINK_SHORT_BASE").filter(|v| !v.trim().is_empty()) {
            Some(base) => normalize_base(base)?,
            None => api_base.clone(),
        };

        let log_level = lookup("TINYLINK_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let log_file = lookup("TINYLINK_LOG_FILE").filter(|v| !v.trim().is_empty());

        Ok(Config {
            api_base,
            short_base,
            log_level,
            log_file,
        })
    }
}

/// Validate a base address and strip the trailing slash so paths can be
/// appended with plain formatting.
fn normalize_base(raw: String) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(TinylinkError::config("base URL cannot be empty"));
    }

    let parsed = Url::parse(trimmed)
        .map_err(|e| TinylinkError::config(format!("invalid base URL '{}': {}", trimmed, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(TinylinkError::config(format!(
            "unsupported scheme '{}' in base URL '{}'",
            other, trimmed
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.short_base, DEFAULT_API_BASE);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("TINYLINK_API_URL", "https://api.example.com"),
            ("TINYLINK_SHORT_BASE", "https://tl.example.com"),
            ("TINYLINK_LOG", "debug"),
            ("TINYLINK_LOG_FILE", "/tmp/tinylink.log"),
        ]))
        .unwrap();
        assert_eq!(config.api_base, "https://api.example.com");
        assert_eq!(config.short_base, "https://tl.example.com");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file.as_deref(), Some("/tmp/tinylink.log"));
    }

    #[test]
    fn test_short_base_falls_back_to_api_base() {
        let config = Config::from_lookup(lookup_from(&[(
            "TINYLINK_API_URL",
            "https://api.example.com",
        )]))
        .unwrap();
        assert_eq!(config.short_base, "https://api.example.com");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = Config::from_lookup(lookup_from(&[(
            "TINYLINK_API_URL",
            "http://localhost:4000/",
        )]))
        .unwrap();
        assert_eq!(config.api_base, "http://localhost:4000");
    }

    #[test]
    fn test_invalid_base_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("TINYLINK_API_URL", "not a url")]));
        assert!(matches!(result, Err(TinylinkError::Config(_))));
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("TINYLINK_API_URL", "ftp://host")]));
        assert!(matches!(result, Err(TinylinkError::Config(_))));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("TINYLINK_API_URL", "  "),
            ("TINYLINK_LOG", ""),
        ]))
        .unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}
