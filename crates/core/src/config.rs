//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handlers and mounted views never read process-wide
//! environment variables; they receive a `CoreConfig`.

use crate::constants::{
    DEFAULT_REPORTS_URL, DEFAULT_REST_ADDR, ENV_DISPLAY_TZ, ENV_FETCH_TIMEOUT_SECS,
    ENV_REPORTS_URL, ENV_REST_ADDR,
};
use crate::error::{ConfigError, ConfigResult};
use reqwest::Url;
use std::time::Duration;
use swasthya_types::DisplayZone;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    reports_url: Url,
    fetch_timeout: Option<Duration>,
    display_zone: DisplayZone,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - the reports URL is not `http` or `https`,
    /// - the fetch timeout is zero.
    pub fn new(
        reports_url: Url,
        fetch_timeout: Option<Duration>,
        display_zone: DisplayZone,
    ) -> ConfigResult<Self> {
        if !matches!(reports_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnparseableUrl {
                url: reports_url.to_string(),
                reason: "scheme must be http or https".into(),
            });
        }

        if fetch_timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::InvalidInput(
                "fetch timeout cannot be zero".into(),
            ));
        }

        Ok(Self {
            reports_url,
            fetch_timeout,
            display_zone,
        })
    }

    /// Resolve configuration from the process environment.
    ///
    /// Intended to be called exactly once from a binary's `main`, after `.env` loading.
    pub fn from_env() -> ConfigResult<Self> {
        Self::new(
            reports_url_from_env_value(std::env::var(ENV_REPORTS_URL).ok())?,
            fetch_timeout_from_env_value(std::env::var(ENV_FETCH_TIMEOUT_SECS).ok())?,
            display_zone_from_env_value(std::env::var(ENV_DISPLAY_TZ).ok())?,
        )
    }

    /// Same as [`CoreConfig::new`] but with a different endpoint.
    pub fn with_reports_url(&self, reports_url: Url) -> ConfigResult<Self> {
        Self::new(reports_url, self.fetch_timeout, self.display_zone)
    }

    pub fn reports_url(&self) -> &Url {
        &self.reports_url
    }

    /// Request timeout, or `None` to use the HTTP client's default.
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout
    }

    pub fn display_zone(&self) -> DisplayZone {
        self.display_zone
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the reports URL from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_REPORTS_URL`].
pub fn reports_url_from_env_value(value: Option<String>) -> ConfigResult<Url> {
    let raw = non_empty(value).unwrap_or_else(|| DEFAULT_REPORTS_URL.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::UnparseableUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })
}

/// Parse the optional fetch timeout in whole seconds.
///
/// `None` or empty means "no explicit timeout".
pub fn fetch_timeout_from_env_value(value: Option<String>) -> ConfigResult<Option<Duration>> {
    let Some(raw) = non_empty(value) else {
        return Ok(None);
    };

    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs))),
        _ => Err(ConfigError::InvalidTimeout(raw)),
    }
}

/// Parse the display zone, defaulting to UTC.
pub fn display_zone_from_env_value(value: Option<String>) -> ConfigResult<DisplayZone> {
    Ok(non_empty(value)
        .map(|v| v.parse::<DisplayZone>())
        .transpose()?
        .unwrap_or_default())
}

/// Resolve the REST bind address, defaulting to [`DEFAULT_REST_ADDR`].
pub fn rest_addr_from_env_value(value: Option<String>) -> String {
    non_empty(value).unwrap_or_else(|| DEFAULT_REST_ADDR.to_string())
}

/// Read the REST bind address from `SWASTHYA_REST_ADDR`.
pub fn rest_addr_from_env() -> String {
    rest_addr_from_env_value(std::env::var(ENV_REST_ADDR).ok())
}
