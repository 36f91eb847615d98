//! Plot navigation and export.

use jrpc::params;
use serde_json::Value;

use crate::api::method;
use crate::api::scope;
use crate::client::RemoteServer;
use crate::error::Result;

impl RemoteServer {
    pub async fn next_plot(&self) -> Result<()> {
        self.notify(scope::RPC, method::NEXT_PLOT, Vec::new()).await
    }

    pub async fn previous_plot(&self) -> Result<()> {
        self.notify(scope::RPC, method::PREVIOUS_PLOT, Vec::new()).await
    }

    pub async fn clear_plots(&self) -> Result<()> {
        self.notify(scope::RPC, method::CLEAR_PLOTS, Vec::new()).await
    }

    pub async fn refresh_plot(&self) -> Result<()> {
        self.notify(scope::RPC, method::REFRESH_PLOT, Vec::new()).await
    }

    pub async fn export_plot(&self, path: &str, width: u32, height: u32) -> Result<()> {
        self.notify(scope::RPC, method::EXPORT_PLOT, params![path, width, height]?).await
    }

    /// Answers a locator request; `None` ends the locator session.
    pub async fn locator_completed(&self, point: Option<(i32, i32)>) -> Result<()> {
        let point = point.map(|(x, y)| serde_json::json!({ "x": x, "y": y }));
        self.notify(scope::RPC, method::LOCATOR_COMPLETED, params![point]?).await
    }

    pub async fn set_manipulator_values(&self, values: &Value) -> Result<()> {
        self.notify(scope::RPC, method::SET_MANIPULATOR_VALUES, params![values]?).await
    }
}
