//! File operations. Paths are plain server-side path strings.

use jrpc::params;
use serde_json::Value;

use crate::api::method;
use crate::api::scope;
use crate::client::RemoteServer;
use crate::error::Result;

/// Opaque token the upload endpoint returns, echoed back to finish the upload.
pub type UploadToken = Value;

impl RemoteServer {
    /// Lists a directory; `monitor` asks the server to push changes to it.
    pub async fn list_files(&self, directory: &str, monitor: bool) -> Result<Vec<Value>> {
        self.request(scope::RPC, method::LIST_FILES, params![directory, monitor]?).await
    }

    pub async fn list_all_files(&self, path: &str, pattern: &str) -> Result<Vec<String>> {
        self.request(scope::RPC, method::LIST_ALL_FILES, params![path, pattern]?).await
    }

    pub async fn create_file(&self, path: &str) -> Result<()> {
        self.notify(scope::RPC, method::CREATE_FILE, params![path]?).await
    }

    pub async fn create_folder(&self, path: &str) -> Result<()> {
        self.notify(scope::RPC, method::CREATE_FOLDER, params![path]?).await
    }

    pub async fn delete_files(&self, paths: &[&str]) -> Result<()> {
        self.notify(scope::RPC, method::DELETE_FILES, params![paths]?).await
    }

    pub async fn copy_file(&self, source: &str, target: &str) -> Result<()> {
        self.notify(scope::RPC, method::COPY_FILE, params![source, target]?).await
    }

    pub async fn move_files(&self, paths: &[&str], target_dir: &str) -> Result<()> {
        self.notify(scope::RPC, method::MOVE_FILES, params![paths, target_dir]?).await
    }

    pub async fn rename_file(&self, path: &str, target: &str) -> Result<()> {
        self.notify(scope::RPC, method::RENAME_FILE, params![path, target]?).await
    }

    /// Commits or discards a staged upload.
    pub async fn complete_upload(&self, token: &UploadToken, commit: bool) -> Result<()> {
        self.notify(scope::RPC, method::COMPLETE_UPLOAD, params![token, commit]?).await
    }
}
