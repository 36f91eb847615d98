//! Event polling, used by listener implementations.

use jrpc::params;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::api::method;
use crate::api::scope;
use crate::client::RemoteServer;
use crate::error::Result;

/// One server-pushed event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientEvent {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

impl RemoteServer {
    /// Events newer than `last_event_id`. The server holds the request open
    /// until something arrives or it times out.
    pub async fn get_events(&self, last_event_id: i64) -> Result<Vec<ClientEvent>> {
        self.request(scope::EVENTS, method::GET_EVENTS, params![last_event_id]?).await
    }
}
