use std::time::Duration;

use log::warn;
use wealthdash_core::constants::{DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "WD_API_BASE_URL";

/// Environment variable overriding the per-request timeout, in milliseconds.
pub const TIMEOUT_ENV: &str = "WD_REQUEST_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Reads overrides from the process environment, loading `.env` first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or invalid values keep the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup(BASE_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.base_url);

        let timeout = match lookup(TIMEOUT_ENV) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    warn!(
                        "Ignoring invalid {}={:?}, using {}s",
                        TIMEOUT_ENV,
                        raw,
                        defaults.timeout.as_secs()
                    );
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        Self::new(&base_url, timeout)
    }
}
