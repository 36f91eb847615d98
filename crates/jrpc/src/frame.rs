//! # Protocol Frames
//!
//! The outbound `Call` and its wire envelope (`Request`), and the decoded
//! inbound `Response`.
//!
//! ## Invariants
//! - **Positional Params**: params are an ordered list. Absent values are
//!   written as an explicit `null`, never omitted.
//! - **Panic Safety**: all decoding paths return `Result`.
//! - **Error Precedence**: a body carrying `error` is an error, whatever else it
//!   carries. `asyncHandle` wins over `result`.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::error::Result;
use crate::error::RpcError;
use crate::error::WireError;

/// One outbound RPC: a route namespace, a method, and positional params.
///
/// Immutable once constructed; retries re-send the identical value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Call {
    scope: String,
    method: String,
    params: Vec<Value>,
}

impl Call {
    pub fn new(
        scope: impl Into<String>,
        method: impl Into<String>,
        params: Vec<Value>,
    ) -> Result<Self> {
        let scope = scope.into();
        let method = method.into();
        if scope.is_empty() {
            return Err(WireError::EmptyScope);
        }
        if method.is_empty() {
            return Err(WireError::EmptyMethod);
        }
        Ok(Self { scope, method, params })
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// The `<scope>/<method>` path this call is posted to.
    pub fn path(&self) -> String {
        format!("{}/{}", self.scope, self.method)
    }

    /// Builds the wire envelope for this call, without session identity.
    pub fn to_request(&self) -> Request {
        Request {
            method: self.method.clone(),
            params: self.params.clone(),
            client_id: None,
            version: None,
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}({} params)", self.scope, self.method, self.params.len())
    }
}

/// The JSON body posted for a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: String,
    pub params: Vec<Value>,
    #[serde(rename = "clientId", default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<f64>,
}

impl Request {
    /// Attaches the session identity recorded at client init.
    pub fn with_identity(mut self, client_id: Option<String>, version: f64) -> Self {
        if client_id.is_some() {
            self.client_id = client_id;
            self.version = Some(version);
        }
        self
    }

    pub fn to_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Token naming a result that will arrive later over the event channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AsyncHandle(pub String);

impl fmt::Display for AsyncHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The call completed. `events_pending` is false only when the server
    /// explicitly said so.
    Success { result: Value, events_pending: bool },
    /// The real result will be delivered later, correlated by this handle.
    Async(AsyncHandle),
    /// The server rejected the call.
    Error(RpcError),
}

impl Response {
    /// A success whose events-pending flag is left to the default.
    pub fn ok(result: Value) -> Self {
        Self::Success { result, events_pending: true }
    }

    /// A success flagged as not having queued any events.
    pub fn ok_quiet(result: Value) -> Self {
        Self::Success { result, events_pending: false }
    }

    pub fn error(code: i64, message: impl Into<String>) -> Self {
        Self::Error(RpcError::new(code, message))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut obj) = value else {
            return Err(WireError::NotAnObject(value.to_string()));
        };

        if let Some(error) = obj.remove("error").filter(|e| !e.is_null()) {
            let error = serde_json::from_value::<RpcError>(error)
                .map_err(|e| WireError::MalformedError(e.to_string()))?;
            return Ok(Self::Error(error));
        }

        if let Some(handle) = obj.remove("asyncHandle").filter(|h| !h.is_null()) {
            return match handle {
                Value::String(h) => Ok(Self::Async(AsyncHandle(h))),
                other => Err(WireError::InvalidAsyncHandle(other.to_string())),
            };
        }

        let events_pending = events_pending(obj.get("ep"));
        let result = obj.remove("result").unwrap_or(Value::Null);
        Ok(Self::Success { result, events_pending })
    }

    /// Encodes this response the way the server writes it.
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        match self {
            Self::Success { result, events_pending } => {
                obj.insert("result".into(), result.clone());
                if !events_pending {
                    obj.insert("ep".into(), Value::String("false".into()));
                }
            }
            Self::Async(handle) => {
                obj.insert("asyncHandle".into(), Value::String(handle.0.clone()));
            }
            Self::Error(error) => {
                let mut err = Map::new();
                err.insert("code".into(), Value::from(error.code));
                err.insert("message".into(), Value::String(error.message.clone()));
                obj.insert("error".into(), Value::Object(err));
            }
        }
        Value::Object(obj)
    }
}

/// Reads the `ep` flag. Absent means events may be pending.
fn events_pending(ep: Option<&Value>) -> bool {
    match ep {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        Some(Value::Bool(b)) => *b,
        // unknown encodings poll anyway
        Some(_) => true,
    }
}
