//! # Response Sinks
//!
//! Where a call's outcome goes. A sink is consulted for cancellation at every
//! delivery point; a cancelled sink is never invoked.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use serde_json::Value;
use tokio::sync::oneshot;

use crate::error::ServerError;

/// The originating caller's result sink.
pub trait ResponseSink: Send + Sync {
    fn on_response(&self, result: Value);

    fn on_error(&self, error: ServerError);

    /// Checked right before delivery.
    fn cancelled(&self) -> bool {
        false
    }
}

/// Shared cooperative cancellation flag.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

pub type Reply = std::result::Result<Value, ServerError>;

/// Adapts the callback sink onto a oneshot future.
///
/// Reports cancelled when its flag is set or when the receiving half has been
/// dropped, so an abandoned future never gets a delivery.
pub struct ReplySink {
    tx: Mutex<Option<oneshot::Sender<Reply>>>,
    cancel: CancelFlag,
}

impl ReplySink {
    pub fn channel(cancel: CancelFlag) -> (Arc<Self>, oneshot::Receiver<Reply>) {
        let (tx, rx) = oneshot::channel();
        let sink = Arc::new(Self {
            tx: Mutex::new(Some(tx)),
            cancel,
        });
        (sink, rx)
    }

    fn deliver(&self, reply: Reply) {
        let tx = self.tx.lock().unwrap_or_else(PoisonError::into_inner).take();
        if let Some(tx) = tx {
            // receiver gone means nobody is waiting
            let _ = tx.send(reply);
        }
    }
}

impl ResponseSink for ReplySink {
    fn on_response(&self, result: Value) {
        self.deliver(Ok(result));
    }

    fn on_error(&self, error: ServerError) {
        self.deliver(Err(error));
    }

    fn cancelled(&self) -> bool {
        if self.cancel.is_cancelled() {
            return true;
        }
        let tx = self.tx.lock().unwrap_or_else(PoisonError::into_inner);
        tx.as_ref().is_none_or(|tx| tx.is_closed())
    }
}

/// Sink for calls nobody waits on. Reports itself cancelled, so replies and
/// errors alike are dropped at delivery.
#[derive(Debug, Default)]
pub struct DetachedSink;

impl ResponseSink for DetachedSink {
    fn on_response(&self, _result: Value) {}

    fn on_error(&self, _error: ServerError) {}

    fn cancelled(&self) -> bool {
        true
    }
}
