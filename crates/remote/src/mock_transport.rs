//! Test doubles for the client's collaborators.
//!
//! These are used internally by the test suite and are not part of the public API.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use jrpc::AsyncHandle;
use jrpc::Request;
use jrpc::Response;
use jrpc::RpcError;
use serde_json::Value;

use crate::auth::CredentialRefresher;
use crate::auth::CredentialsUpdate;
use crate::error::ServerError;
use crate::listener::AsyncHandles;
use crate::listener::EventListener;
use crate::listener::PendingRequest;
use crate::sink::CancelFlag;
use crate::sink::ResponseSink;
use crate::transport;
use crate::transport::Transport;

/// Replays queued replies in order and records every request it is handed.
///
/// Once the script runs out it answers `{"result": null, "ep": "false"}`.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<transport::Result<Response>>>,
    sent: Mutex<Vec<(String, Request)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, reply: transport::Result<Response>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn push_response(&self, response: Response) {
        self.push(Ok(response));
    }

    pub fn sent(&self) -> Vec<(String, Request)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, url: &str, request: &Request) -> transport::Result<Response> {
        self.sent.lock().unwrap().push((url.to_string(), request.clone()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Response::ok_quiet(Value::Null)))
    }
}

/// What a sink was handed.
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    Response(Value),
    Error(ServerError),
}

/// Sink that remembers every delivery.
#[derive(Default)]
pub struct RecordingSink {
    deliveries: Mutex<Vec<Delivery>>,
    pub cancel: CancelFlag,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().unwrap().clone()
    }
}

impl ResponseSink for RecordingSink {
    fn on_response(&self, result: Value) {
        self.deliveries.lock().unwrap().push(Delivery::Response(result));
    }

    fn on_error(&self, error: ServerError) {
        self.deliveries.lock().unwrap().push(Delivery::Error(error));
    }

    fn cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Listener that counts every nudge and parks async calls.
#[derive(Default)]
pub struct RecordingListener {
    pub starts: AtomicUsize,
    pub stops: AtomicUsize,
    pub ensure_listening: AtomicUsize,
    pub last_max_attempts: AtomicU32,
    pub ensure_events: AtomicUsize,
    pub handles: AsyncHandles,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self, handle: &str) -> Option<PendingRequest> {
        self.handles.take(&AsyncHandle(handle.to_string()))
    }
}

impl EventListener for RecordingListener {
    fn start(&self) {
        self.starts.fetch_add(1, Ordering::SeqCst);
    }

    fn stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }

    fn ensure_listening(&self, max_attempts: u32) {
        self.ensure_listening.fetch_add(1, Ordering::SeqCst);
        self.last_max_attempts.store(max_attempts, Ordering::SeqCst);
    }

    fn ensure_events(&self) {
        self.ensure_events.fetch_add(1, Ordering::SeqCst);
    }

    fn register_async_handle(&self, handle: AsyncHandle, pending: PendingRequest) {
        self.handles.register(handle, pending);
    }
}

/// Refresher answering from a script; `Failure` once the script runs out.
#[derive(Default)]
pub struct ScriptedRefresher {
    answers: Mutex<VecDeque<Result<CredentialsUpdate, RpcError>>>,
    pub calls: AtomicUsize,
}

impl ScriptedRefresher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, answer: Result<CredentialsUpdate, RpcError>) {
        self.answers.lock().unwrap().push_back(answer);
    }
}

#[async_trait::async_trait]
impl CredentialRefresher for ScriptedRefresher {
    async fn update(&self) -> Result<CredentialsUpdate, RpcError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(CredentialsUpdate::Failure))
    }
}
