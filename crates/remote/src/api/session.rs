//! Session lifecycle and preferences.

use jrpc::params;
use serde_json::Value;

use crate::api::method;
use crate::api::scope;
use crate::client::RemoteServer;
use crate::error::Result;
use crate::session::SessionInfo;

impl RemoteServer {
    /// Opens the session. The returned identity is recorded and carried by
    /// every later request.
    pub async fn client_init(&self) -> Result<SessionInfo> {
        let info: SessionInfo = self.request(scope::RPC, method::CLIENT_INIT, Vec::new()).await?;
        self.record_session(&info);
        tracing::info!(
            client_id = %info.client_id,
            version = info.client_version,
            "client initialized"
        );
        Ok(info)
    }

    pub async fn accept_agreement(&self, hash: &str) -> Result<()> {
        self.notify(scope::RPC, method::ACCEPT_AGREEMENT, params![hash]?).await
    }

    pub async fn suspend_session(&self) -> Result<()> {
        self.notify(scope::RPC, method::SUSPEND_SESSION, Vec::new()).await
    }

    pub async fn quit_session(&self, save_workspace: bool) -> Result<()> {
        self.notify(scope::RPC, method::QUIT_SESSION, params![save_workspace]?).await
    }

    pub async fn set_workbench_metrics(&self, metrics: &Value) -> Result<()> {
        self.notify(scope::RPC, method::SET_WORKBENCH_METRICS, params![metrics]?).await
    }

    pub async fn set_ui_prefs(&self, prefs: &Value) -> Result<()> {
        self.notify(scope::RPC, method::SET_UI_PREFS, params![prefs]?).await
    }

    pub async fn get_r_prefs(&self) -> Result<Value> {
        self.request(scope::RPC, method::GET_R_PREFS, Vec::new()).await
    }

    pub async fn set_r_prefs(
        &self,
        save_action: i32,
        load_rdata: bool,
        initial_working_dir: &str,
    ) -> Result<()> {
        let params = params![save_action, load_rdata, initial_working_dir]?;
        self.notify(scope::RPC, method::SET_R_PREFS, params).await
    }

    /// Persists client-side state; `temporary` lives for the session,
    /// `persistent` across sessions.
    pub async fn set_client_state(&self, temporary: &Value, persistent: &Value) -> Result<()> {
        self.notify(scope::RPC, method::SET_CLIENT_STATE, params![temporary, persistent]?).await
    }

    pub async fn user_prompt_completed(&self, response: i32) -> Result<()> {
        self.notify(scope::RPC, method::USER_PROMPT_COMPLETED, params![response]?).await
    }

    /// Writes one entry to the server log.
    pub async fn log(&self, entry_type: i32, entry: &str) -> Result<()> {
        self.notify(scope::LOG, method::LOG, params![entry_type, entry]?).await
    }
}
