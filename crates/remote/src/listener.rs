//! # Event Listener Seam
//!
//! The client does not own the server event stream. It nudges whatever does
//! (`ensure_listening`, `ensure_events`) and parks async-handle calls with it
//! until their out-of-band completion shows up.
//!
//! A listener that receives a completion for a parked handle hands both back
//! through `RemoteServer::complete_async`, which runs the normal response path.

use std::sync::Arc;

use dashmap::DashMap;
use jrpc::AsyncHandle;
use jrpc::Call;

use crate::sink::ResponseSink;

/// Proof that a call may still be retried once. Not `Clone`: consuming it is
/// what bounds a call to a single retry.
#[derive(Debug)]
pub(crate) struct RetryToken(());

impl RetryToken {
    pub(crate) fn first_attempt() -> Option<Self> {
        Some(Self(()))
    }
}

/// An in-flight call: what was sent, whether it may be retried, and who gets
/// the answer.
pub struct PendingRequest {
    pub(crate) call: Arc<Call>,
    pub(crate) retry: Option<RetryToken>,
    pub(crate) sink: Arc<dyn ResponseSink>,
}

impl PendingRequest {
    pub fn call(&self) -> &Call {
        &self.call
    }

    pub fn can_retry(&self) -> bool {
        self.retry.is_some()
    }
}

impl std::fmt::Debug for PendingRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingRequest")
            .field("call", &self.call)
            .field("can_retry", &self.can_retry())
            .finish()
    }
}

/// Long-poll or streaming facility for server-pushed events.
pub trait EventListener: Send + Sync + 'static {
    /// Begin listening. Called once the workbench is ready.
    fn start(&self);

    /// Stop listening. Called on disconnect. Calls still parked here may be
    /// dropped; typed requests waiting on them resolve on their own.
    fn stop(&self);

    /// Make sure the event stream is up, retrying up to `max_attempts` times.
    /// Must be idempotent.
    fn ensure_listening(&self, max_attempts: u32);

    /// A call has probably queued events; poll for them.
    fn ensure_events(&self);

    /// Park `pending` until the completion for `handle` arrives.
    fn register_async_handle(&self, handle: AsyncHandle, pending: PendingRequest);
}

/// Listener for hosts without an event stream. Async completions are dropped
/// along with their sinks.
#[derive(Debug, Default)]
pub struct NoopListener;

impl EventListener for NoopListener {
    fn start(&self) {}

    fn stop(&self) {}

    fn ensure_listening(&self, _max_attempts: u32) {}

    fn ensure_events(&self) {}

    fn register_async_handle(&self, handle: AsyncHandle, pending: PendingRequest) {
        tracing::debug!(%handle, call = %pending.call, "no event listener; dropping async call");
    }
}

/// Correlation table for parked async calls, for listener implementations.
#[derive(Debug, Default)]
pub struct AsyncHandles {
    pending: DashMap<AsyncHandle, PendingRequest>,
}

impl AsyncHandles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parks a call. A second registration under the same handle replaces the
    /// first, whose sink is then dropped undelivered.
    pub fn register(&self, handle: AsyncHandle, pending: PendingRequest) {
        if self.pending.insert(handle.clone(), pending).is_some() {
            tracing::warn!(%handle, "async handle registered twice");
        }
    }

    /// Removes and returns the call parked under `handle`.
    pub fn take(&self, handle: &AsyncHandle) -> Option<PendingRequest> {
        self.pending.remove(handle).map(|(_, pending)| pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drops every parked call without delivering anything.
    pub fn clear(&self) {
        self.pending.clear();
    }
}
