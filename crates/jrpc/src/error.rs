//! # Error Definitions
//!
//! Two distinct families live here:
//!
//! - `WireError`: the *local* side failing to build or read a message.
//! - `RpcError`: the *remote* side (or the path to it) reporting a failure,
//!   carried as a raw numeric code plus message.
//!
//! `ErrorKind` is the closed classification the retry protocol branches on.

use serde::Deserialize;
use serde::Serialize;

/// Failures while constructing or decoding wire messages.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A call must name a method.
    #[error("call method must not be empty")]
    EmptyMethod,
    /// A call must name a scope.
    #[error("call scope must not be empty")]
    EmptyScope,
    /// The response body was not a JSON object.
    #[error("response body is not an object: {0}")]
    NotAnObject(String),
    /// The `error` member was present but malformed.
    #[error("malformed error payload: {0}")]
    MalformedError(String),
    /// The `asyncHandle` member was present but not a string.
    #[error("async handle must be a string, found {0}")]
    InvalidAsyncHandle(String),
    /// Underlying JSON (de)serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for wire operations.
pub type Result<T> = std::result::Result<T, WireError>;

/// Numeric error codes understood by the session server.
///
/// Only a handful drive client behaviour (see [`ErrorKind`]); the rest pass
/// through to callers untouched.
pub mod code {
    pub const SUCCESS: i64 = 0;
    pub const CONNECTION_ERROR: i64 = 1;
    pub const UNAVAILABLE: i64 = 2;
    pub const UNAUTHORIZED: i64 = 3;
    pub const INVALID_CLIENT_ID: i64 = 4;
    pub const PARSE_ERROR: i64 = 5;
    pub const INVALID_REQUEST: i64 = 6;
    pub const METHOD_NOT_FOUND: i64 = 7;
    pub const PARAM_MISSING: i64 = 8;
    pub const PARAM_TYPE_MISMATCH: i64 = 9;
    pub const PARAM_INVALID: i64 = 10;
    pub const METHOD_UNEXPECTED: i64 = 11;
    pub const EXECUTION_ERROR: i64 = 12;
    pub const TRANSMISSION_ERROR: i64 = 13;
    pub const INVALID_CLIENT_VERSION: i64 = 14;
    pub const SERVER_OFFLINE: i64 = 15;
}

/// Classification of an error code for protocol branching.
///
/// Every code maps to exactly one kind. Anything not listed is `Other` and is
/// forwarded to the caller verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unauthorized,
    InvalidClientId,
    InvalidClientVersion,
    ServerOffline,
    Other,
}

impl ErrorKind {
    pub fn of(code: i64) -> Self {
        match code {
            code::UNAUTHORIZED => Self::Unauthorized,
            code::INVALID_CLIENT_ID => Self::InvalidClientId,
            code::INVALID_CLIENT_VERSION => Self::InvalidClientVersion,
            code::SERVER_OFFLINE => Self::ServerOffline,
            _ => Self::Other,
        }
    }

    /// True for the kinds that invalidate the whole session rather than one call.
    pub fn is_session_fatal(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// An error reported by the server, or synthesized from a transport failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("rpc error {code}: {message}")]
pub struct RpcError {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl RpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::of(self.code)
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::new(code::CONNECTION_ERROR, message)
    }

    pub fn transmission(message: impl Into<String>) -> Self {
        Self::new(code::TRANSMISSION_ERROR, message)
    }
}
