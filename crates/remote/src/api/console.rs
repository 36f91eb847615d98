//! Console input and control.

use jrpc::params;
use serde_json::Value;

use crate::api::method;
use crate::api::scope;
use crate::client::RemoteServer;
use crate::error::Result;

impl RemoteServer {
    pub async fn console_input(&self, input: &str) -> Result<()> {
        self.notify(scope::RPC, method::CONSOLE_INPUT, params![input]?).await
    }

    pub async fn reset_console_actions(&self) -> Result<()> {
        self.notify(scope::RPC, method::RESET_CONSOLE_ACTIONS, Vec::new()).await
    }

    pub async fn interrupt(&self) -> Result<()> {
        self.notify(scope::RPC, method::INTERRUPT, Vec::new()).await
    }

    pub async fn abort(&self) -> Result<()> {
        self.notify(scope::RPC, method::ABORT, Vec::new()).await
    }

    pub async fn http_log(&self) -> Result<Vec<Value>> {
        self.request(scope::RPC, method::HTTP_LOG, Vec::new()).await
    }

    pub async fn get_completions(&self, line: &str, cursor_pos: usize) -> Result<Value> {
        self.request(scope::RPC, method::GET_COMPLETIONS, params![line, cursor_pos]?).await
    }
}
