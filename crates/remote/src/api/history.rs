//! Command history.

use jrpc::params;
use serde::Deserialize;
use serde::Serialize;

use crate::api::method;
use crate::api::scope;
use crate::client::RemoteServer;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub index: i64,
    pub command: String,
}

impl RemoteServer {
    /// Entries in `[start, end)`.
    pub async fn get_history(&self, start: i64, end: i64) -> Result<Vec<HistoryEntry>> {
        self.request(scope::RPC, method::GET_HISTORY, params![start, end]?).await
    }

    pub async fn get_recent_history(&self, max_entries: i64) -> Result<Vec<HistoryEntry>> {
        self.request(scope::RPC, method::GET_RECENT_HISTORY, params![max_entries]?).await
    }

    pub async fn search_history(&self, query: &str, max_entries: i64) -> Result<Vec<HistoryEntry>> {
        self.request(scope::RPC, method::SEARCH_HISTORY, params![query, max_entries]?).await
    }

    pub async fn search_history_by_prefix(
        &self,
        prefix: &str,
        max_entries: i64,
    ) -> Result<Vec<HistoryEntry>> {
        let params = params![prefix, max_entries]?;
        self.request(scope::RPC, method::SEARCH_HISTORY_BY_PREFIX, params).await
    }
}
