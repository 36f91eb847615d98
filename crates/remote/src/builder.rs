//! # Client Builder
//!
//! Provides a fluent API for wiring a `RemoteServer` to its collaborators.
//! Anything not supplied falls back to a working default: an HTTP transport,
//! no event listener, no credential renewal.

use std::sync::Arc;

use crate::auth::CredentialRefresher;
use crate::auth::NoRefresh;
use crate::client::RemoteServer;
use crate::config::Config;
use crate::http::HttpTransport;
use crate::listener::EventListener;
use crate::listener::NoopListener;
use crate::transport::Transport;
use crate::transport::TransportError;

const DEFAULT_SIGNAL_CAPACITY: usize = 16;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("base url must be absolute http(s), got {0:?}")]
    InvalidBaseUrl(String),
    #[error("transport setup failed: {0}")]
    Transport(#[from] TransportError),
}

pub type Result<T> = std::result::Result<T, BuildError>;

/// Fluent builder for creating a client with configured collaborators.
pub struct RemoteServerBuilder {
    config: Config,
    transport: Option<Arc<dyn Transport>>,
    listener: Arc<dyn EventListener>,
    refresher: Arc<dyn CredentialRefresher>,
    signal_capacity: usize,
}

impl RemoteServerBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            transport: None,
            listener: Arc::new(NoopListener),
            refresher: Arc::new(NoRefresh),
            signal_capacity: DEFAULT_SIGNAL_CAPACITY,
        }
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn listener(mut self, listener: Arc<dyn EventListener>) -> Self {
        self.listener = listener;
        self
    }

    pub fn refresher(mut self, refresher: Arc<dyn CredentialRefresher>) -> Self {
        self.refresher = refresher;
        self
    }

    /// How many undelivered signals a slow subscriber may lag behind.
    pub fn signal_capacity(mut self, capacity: usize) -> Self {
        self.signal_capacity = capacity;
        self
    }

    pub fn build(self) -> Result<RemoteServer> {
        let base = self.config.base_url.as_str();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(BuildError::InvalidBaseUrl(self.config.base_url));
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(self.config.request_timeout())?),
        };

        Ok(RemoteServer::from_parts(
            self.config,
            transport,
            self.listener,
            self.refresher,
            self.signal_capacity,
        ))
    }
}

impl RemoteServer {
    pub fn builder(config: Config) -> RemoteServerBuilder {
        RemoteServerBuilder::new(config)
    }
}
