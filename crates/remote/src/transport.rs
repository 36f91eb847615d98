//! # Transport Abstraction
//!
//! A minimal, async interface for getting one request envelope to the server
//! and one decoded response back.
//!
//! ## Philosophy
//!
//! - **Envelope-Oriented**: The Transport posts a `Request` to a URL and hands
//!   back a decoded `Response`. It does not interpret error codes, retry, or
//!   touch session state.
//! - **Request-Response**: One call, one answer. Server-pushed events travel
//!   over the event listener, not here.

use jrpc::Request;
use jrpc::Response;
use jrpc::RpcError;

/// Errors that occur at the network/transport layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// The server is unreachable or the connection was dropped.
    #[error("connection lost: {0}")]
    ConnectionLost(String),
    /// The operation timed out before a response was received.
    #[error("request timed out")]
    Timeout,
    /// The server answered with a non-success HTTP status and no RPC body.
    #[error("http status {status}: {body}")]
    Status { status: u16, body: String },
    /// A reply arrived but could not be decoded.
    #[error("undecodable reply: {0}")]
    Decode(String),
}

impl TransportError {
    /// Folds a transport failure into the error shape the retry protocol
    /// branches on. Callers only see the code.
    pub fn into_rpc_error(self) -> RpcError {
        match self {
            Self::Decode(msg) => RpcError::transmission(msg),
            other => RpcError::connection(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransportError>;

/// A mechanism to post a request envelope and receive a reply.
///
/// This trait is designed to be object-safe (`Arc<dyn Transport>`).
#[async_trait::async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Posts `request` to `url` and waits for the decoded response.
    ///
    /// # invariants
    /// - Must return `Ok(Response::Error(..))` for an error the server
    ///   reported in the body; `Err` is reserved for failures getting there.
    /// - Must not retry on its own.
    async fn send(&self, url: &str, request: &Request) -> Result<Response>;
}
