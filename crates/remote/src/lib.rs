//! # remote
//!
//! Client side of the remote session RPC channel.
//!
//! Every server operation goes through one path: post the call, read the
//! reply, and on failure either hand the error to the caller, renew
//! credentials and retry once, or tear the session down and raise a signal.
//! The typed endpoint methods in [`api`] are thin wrappers over that path.
//!
//! ```no_run
//! # async fn demo() -> anyhow::Result<()> {
//! use remote::Config;
//! use remote::RemoteServer;
//!
//! let server = RemoteServer::builder(Config::new("http://localhost:8787/")).build()?;
//! let info = server.client_init().await?;
//! server.mark_ready(info.mode);
//! server.console_input("print(1)").await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod listener;
pub mod session;
pub mod signal;
pub mod sink;
pub mod transport;
pub mod urls;

#[cfg(test)]
mod mock_transport;

pub use auth::CredentialRefresher;
pub use auth::CredentialsUpdate;
pub use builder::RemoteServerBuilder;
pub use client::CallOutcome;
pub use client::RemoteServer;
pub use config::Config;
pub use error::Error;
pub use error::Result;
pub use error::ServerError;
pub use listener::AsyncHandles;
pub use listener::EventListener;
pub use listener::PendingRequest;
pub use session::SessionInfo;
pub use session::SessionMode;
pub use signal::Signal;
pub use sink::CancelFlag;
pub use sink::ResponseSink;
pub use transport::Transport;
pub use transport::TransportError;
