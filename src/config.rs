//! Backend API configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin without a trailing slash, e.g. `https://api.example.test`.
    pub base_url: String,
    /// Whole-request timeout for the native transport.
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned(), request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS }
    }
}

impl ApiConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `FIELDBOOK_API_URL`: default `http://127.0.0.1:5000`
    /// - `FIELDBOOK_REQUEST_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the URL is not http(s) or the timeout is
    /// not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("FIELDBOOK_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_owned());
        let mut config = Self::with_base_url(&base_url)?;
        if let Ok(raw) = std::env::var("FIELDBOOK_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = parse_timeout(&raw)?;
        }
        Ok(config)
    }

    /// Build config for a fixed base URL with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] for anything but an absolute
    /// http(s) URL.
    pub fn with_base_url(raw: &str) -> Result<Self, ConfigError> {
        Ok(Self { base_url: normalize_base_url(raw)?, ..Self::default() })
    }

    /// Join an API path such as `/api/Auth/login` onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match host {
        Some(host) if !host.is_empty() => Ok(trimmed.to_owned()),
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_owned())),
    }
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::Parse { var: "FIELDBOOK_REQUEST_TIMEOUT_SECS", value: raw.to_owned() }),
    }
}
