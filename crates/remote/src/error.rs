//! # Error Definitions
//!
//! `ServerError` is what a caller's sink receives. `Error` is what the typed
//! endpoint methods return.

use jrpc::ErrorKind;
use jrpc::RpcError;
use jrpc::WireError;

/// An ordinary (non session-fatal) failure handed to the caller, annotated
/// with the method that produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{method} failed with code {code}: {message}")]
pub struct ServerError {
    pub method: String,
    pub code: i64,
    pub message: String,
}

impl ServerError {
    pub fn new(method: impl Into<String>, error: RpcError) -> Self {
        Self {
            method: method.into(),
            code: error.code,
            message: error.message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::of(self.code)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server (or the path to it) reported a failure for this call.
    #[error(transparent)]
    Server(#[from] ServerError),
    /// The session is gone; no further calls will be delivered.
    #[error("disconnected from session")]
    Disconnected,
    /// The call was cancelled before its result was delivered.
    #[error("call cancelled")]
    Cancelled,
    /// The result did not have the expected shape.
    #[error("unexpected result shape: {0}")]
    Decode(#[from] serde_json::Error),
    /// The call could not be built.
    #[error("wire error: {0}")]
    Wire(#[from] WireError),
}

pub type Result<T> = std::result::Result<T, Error>;
