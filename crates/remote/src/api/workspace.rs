//! Workspace objects and data import.

use jrpc::params;
use serde_json::Value;

use crate::api::method;
use crate::api::scope;
use crate::client::RemoteServer;
use crate::error::Result;

impl RemoteServer {
    pub async fn list_objects(&self) -> Result<Vec<Value>> {
        self.request(scope::RPC, method::LIST_OBJECTS, Vec::new()).await
    }

    pub async fn remove_all_objects(&self) -> Result<()> {
        self.notify(scope::RPC, method::REMOVE_ALL_OBJECTS, Vec::new()).await
    }

    pub async fn set_object_value(&self, name: &str, value: &str) -> Result<()> {
        self.notify(scope::RPC, method::SET_OBJECT_VALUE, params![name, value]?).await
    }

    pub async fn get_object_value(&self, name: &str) -> Result<Value> {
        self.request(scope::RPC, method::GET_OBJECT_VALUE, params![name]?).await
    }

    pub async fn save_workspace(&self, filename: &str) -> Result<()> {
        self.notify(scope::RPC, method::SAVE_WORKSPACE, params![filename]?).await
    }

    pub async fn load_workspace(&self, filename: &str) -> Result<()> {
        self.notify(scope::RPC, method::LOAD_WORKSPACE, params![filename]?).await
    }

    pub async fn download_data_file(&self, url: &str) -> Result<Value> {
        self.request(scope::RPC, method::DOWNLOAD_DATA_FILE, params![url]?).await
    }

    pub async fn get_data_preview(&self, path: &str) -> Result<Value> {
        self.request(scope::RPC, method::GET_DATA_PREVIEW, params![path]?).await
    }

    pub async fn get_output_preview(
        &self,
        path: &str,
        heading: bool,
        separator: &str,
        quote: &str,
    ) -> Result<Value> {
        let params = params![path, heading, separator, quote]?;
        self.request(scope::RPC, method::GET_OUTPUT_PREVIEW, params).await
    }

    /// Answers a server-initiated edit request. `None` cancels the edit.
    pub async fn edit_completed(&self, text: Option<&str>) -> Result<()> {
        self.notify(scope::RPC, method::EDIT_COMPLETED, params![text]?).await
    }

    /// Answers a server-initiated file chooser. `None` means nothing was chosen.
    pub async fn choose_file_completed(&self, file: Option<&str>) -> Result<()> {
        self.notify(scope::RPC, method::CHOOSE_FILE_COMPLETED, params![file]?).await
    }
}
