//! # Client Configuration
//!
//! Plain data, deserializable from whatever the host uses for settings.
//! Every field but `base_url` has a default.

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

pub const DEFAULT_MAX_LISTEN_ATTEMPTS: u32 = 10;
pub const DEFAULT_CREDENTIALS_UPDATE_INTERVAL_SECS: u64 = 5 * 60;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root every scope is resolved against, e.g. `http://localhost:8787/`.
    pub base_url: String,
    /// Ceiling handed to `EventListener::ensure_listening`.
    #[serde(default = "default_max_listen_attempts")]
    pub max_listen_attempts: u32,
    /// Period of the background credentials update in server mode.
    #[serde(default = "default_credentials_update_interval_secs")]
    pub credentials_update_interval_secs: u64,
    /// Per-request timeout for the HTTP transport.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_max_listen_attempts() -> u32 {
    DEFAULT_MAX_LISTEN_ATTEMPTS
}

fn default_credentials_update_interval_secs() -> u64 {
    DEFAULT_CREDENTIALS_UPDATE_INTERVAL_SECS
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            max_listen_attempts: DEFAULT_MAX_LISTEN_ATTEMPTS,
            credentials_update_interval_secs: DEFAULT_CREDENTIALS_UPDATE_INTERVAL_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    pub fn credentials_update_interval(&self) -> Duration {
        Duration::from_secs(self.credentials_update_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// `base_url` with exactly one trailing slash.
    pub(crate) fn normalized_base(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}
