//! # Session Identity
//!
//! The identity the server hands out at client init, and the connectivity
//! state the client keeps alongside it.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// How the session is hosted. Server mode keeps credentials fresh in the
/// background; desktop mode has nothing to refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    #[default]
    Desktop,
    Server,
}

/// The `client_init` result.
///
/// Only the fields the client itself needs are typed; the rest is kept
/// verbatim for whoever renders the workbench.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "clientVersion", default)]
    pub client_version: f64,
    #[serde(default)]
    pub mode: SessionMode,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Identity and connectivity, owned by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionAuthState {
    pub client_id: Option<String>,
    pub client_version: f64,
    pub connected: bool,
}

impl Default for SessionAuthState {
    fn default() -> Self {
        Self {
            client_id: None,
            client_version: 0.0,
            connected: true,
        }
    }
}

impl SessionAuthState {
    pub(crate) fn record(&mut self, info: &SessionInfo) {
        self.client_id = Some(info.client_id.clone());
        self.client_version = info.client_version;
    }
}
