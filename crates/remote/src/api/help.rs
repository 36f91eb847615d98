//! Help topics and links.

use jrpc::params;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::api::method;
use crate::api::scope;
use crate::client::RemoteServer;
use crate::error::Result;

/// A titled help link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub title: String,
}

impl RemoteServer {
    pub async fn suggest_topics(&self, prefix: &str) -> Result<Vec<String>> {
        self.request(scope::RPC, method::SUGGEST_TOPICS, params![prefix]?).await
    }

    pub async fn get_help(
        &self,
        topic: &str,
        package: Option<&str>,
        options: i32,
    ) -> Result<Value> {
        self.request(scope::RPC, method::GET_HELP, params![topic, package, options]?).await
    }

    /// Asks the server to display a topic. Nothing waits for the answer.
    pub async fn show_help_topic(&self, topic: &str, package: Option<&str>) -> Result<()> {
        self.detach(scope::RPC, method::SHOW_HELP_TOPIC, params![topic, package]?).await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<String>> {
        self.request(scope::RPC, method::SEARCH, params![query]?).await
    }

    pub async fn get_help_links(&self, set_name: &str) -> Result<Value> {
        self.request(scope::RPC, method::GET_HELP_LINKS, params![set_name]?).await
    }

    /// Stores a link set as parallel url and title arrays. Nothing waits for
    /// the answer.
    pub async fn set_help_links(&self, set_name: &str, links: &[Link]) -> Result<()> {
        let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
        let titles: Vec<&str> = links.iter().map(|l| l.title.as_str()).collect();
        self.detach(scope::RPC, method::SET_HELP_LINKS, params![set_name, urls, titles]?).await
    }
}
