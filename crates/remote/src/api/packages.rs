//! Package management.

use jrpc::params;
use serde_json::Value;

use crate::api::method;
use crate::api::scope;
use crate::client::RemoteServer;
use crate::error::Result;

impl RemoteServer {
    pub async fn list_packages(&self) -> Result<Vec<Value>> {
        self.request(scope::RPC, method::LIST_PACKAGES, Vec::new()).await
    }

    pub async fn available_packages(&self, repository: &str) -> Result<Vec<String>> {
        self.request(scope::RPC, method::AVAILABLE_PACKAGES, params![repository]?).await
    }

    pub async fn load_package(&self, name: &str) -> Result<()> {
        self.notify(scope::RPC, method::LOAD_PACKAGE, params![name]?).await
    }

    pub async fn unload_package(&self, name: &str) -> Result<()> {
        self.notify(scope::RPC, method::UNLOAD_PACKAGE, params![name]?).await
    }

    pub async fn is_cran_configured(&self) -> Result<bool> {
        self.request(scope::RPC, method::IS_CRAN_CONFIGURED, Vec::new()).await
    }

    pub async fn set_cran_repos_url(&self, url: &str) -> Result<()> {
        self.notify(scope::RPC, method::SET_CRAN_REPOS_URL, params![url]?).await
    }
}
