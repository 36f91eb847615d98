//! Source documents.
//!
//! Documents are addressed by the server-issued id. Saves return the
//! document's new content hash.

use std::collections::HashMap;

use jrpc::params;
use serde_json::Value;

use crate::api::method;
use crate::api::scope;
use crate::client::RemoteServer;
use crate::error::Result;

impl RemoteServer {
    pub async fn new_document(&self, filetype: &str, properties: &Value) -> Result<Value> {
        self.request(scope::RPC, method::NEW_DOCUMENT, params![filetype, properties]?).await
    }

    pub async fn open_document(&self, path: &str, filetype: &str) -> Result<Value> {
        self.request(scope::RPC, method::OPEN_DOCUMENT, params![path, filetype]?).await
    }

    pub async fn list_documents(&self) -> Result<Vec<Value>> {
        self.request(scope::RPC, method::LIST_DOCUMENTS, Vec::new()).await
    }

    /// Saves the full contents. `path` and `filetype` are `None` when unchanged.
    pub async fn save_document(
        &self,
        id: &str,
        path: Option<&str>,
        filetype: Option<&str>,
        contents: &str,
    ) -> Result<String> {
        let params = params![id, path, filetype, contents]?;
        self.request(scope::RPC, method::SAVE_DOCUMENT, params).await
    }

    /// Saves a single replacement over `[offset, offset + length)`.
    ///
    /// `hash` is the content hash the diff was computed against; the server
    /// rejects the diff when its copy has moved on.
    #[allow(clippy::too_many_arguments)]
    pub async fn save_document_diff(
        &self,
        id: &str,
        path: Option<&str>,
        filetype: Option<&str>,
        replacement: &str,
        offset: usize,
        length: usize,
        hash: &str,
    ) -> Result<String> {
        let params = params![id, path, filetype, replacement, offset, length, hash]?;
        self.request(scope::RPC, method::SAVE_DOCUMENT_DIFF, params).await
    }

    pub async fn check_for_external_edit(&self, id: &str) -> Result<Value> {
        self.request(scope::RPC, method::CHECK_FOR_EXTERNAL_EDIT, params![id]?).await
    }

    pub async fn ignore_external_edit(&self, id: &str) -> Result<()> {
        self.notify(scope::RPC, method::IGNORE_EXTERNAL_EDIT, params![id]?).await
    }

    pub async fn close_document(&self, id: &str) -> Result<()> {
        self.notify(scope::RPC, method::CLOSE_DOCUMENT, params![id]?).await
    }

    pub async fn close_all_documents(&self) -> Result<()> {
        self.notify(scope::RPC, method::CLOSE_ALL_DOCUMENTS, Vec::new()).await
    }

    pub async fn set_source_document_on_save(&self, id: &str, should_source: bool) -> Result<()> {
        let params = params![id, should_source]?;
        self.notify(scope::RPC, method::SET_SOURCE_DOCUMENT_ON_SAVE, params).await
    }

    pub async fn save_active_document(&self, contents: &str, sweave: bool) -> Result<()> {
        self.notify(scope::RPC, method::SAVE_ACTIVE_DOCUMENT, params![contents, sweave]?).await
    }

    /// A `None` value removes the property.
    pub async fn modify_document_properties(
        &self,
        id: &str,
        properties: &HashMap<String, Option<String>>,
    ) -> Result<()> {
        let params = params![id, properties]?;
        self.notify(scope::RPC, method::MODIFY_DOCUMENT_PROPERTIES, params).await
    }

    pub async fn revert_document(&self, id: &str, filetype: &str) -> Result<Value> {
        self.request(scope::RPC, method::REVERT_DOCUMENT, params![id, filetype]?).await
    }

    pub async fn remove_content_url(&self, content_url: &str) -> Result<()> {
        self.notify(scope::RPC, method::REMOVE_CONTENT_URL, params![content_url]?).await
    }

    pub async fn detect_free_vars(&self, code: &str) -> Result<Vec<String>> {
        self.request(scope::RPC, method::DETECT_FREE_VARS, params![code]?).await
    }

    pub async fn publish_pdf(&self, id: &str, title: &str, update: bool) -> Result<Value> {
        self.request(scope::RPC, method::PUBLISH_PDF, params![id, title, update]?).await
    }

    pub async fn is_tex_installed(&self) -> Result<bool> {
        self.request(scope::RPC, method::IS_TEX_INSTALLED, Vec::new()).await
    }
}
