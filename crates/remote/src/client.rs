//! # Remote Server Client
//!
//! One generic entry point, `send`, carries every call through the same
//! request / retry / recovery protocol:
//!
//! ```text
//! Sent ──► Succeeded                  sink.on_response, maybe ensure_events
//!   │  ├─► AsyncPending               parked with the event listener
//!   │  └─► ErrorRaw ──► RetryAttempted    UNAUTHORIZED, token held, refresh ok
//!   │                ├─► Escalated         session-fatal: disconnect + signal
//!   │                └─► DeliveredToCaller sink.on_error
//!   └──── (retry re-enters Sent without a token)
//! ```
//!
//! ## Invariants
//! - **Single Retry**: the retry token is consumed by the first recovery
//!   attempt, so an original call is dispatched at most twice.
//! - **Silent Drop**: nothing reaches a sink once the client is disconnected
//!   or the sink reports itself cancelled.
//! - **Absorbed Fatals**: session-fatal errors never reach the caller's sink;
//!   they disconnect the client and raise exactly one `Signal`.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use jrpc::AsyncHandle;
use jrpc::Call;
use jrpc::ErrorKind;
use jrpc::Response;
use jrpc::RpcError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::broadcast;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::auth::CredentialRefresher;
use crate::auth::CredentialsUpdate;
use crate::config::Config;
use crate::error::Error;
use crate::error::Result;
use crate::error::ServerError;
use crate::listener::EventListener;
use crate::listener::PendingRequest;
use crate::listener::RetryToken;
use crate::session::SessionAuthState;
use crate::session::SessionInfo;
use crate::session::SessionMode;
use crate::signal::Signal;
use crate::sink::CancelFlag;
use crate::sink::DetachedSink;
use crate::sink::ReplySink;
use crate::sink::ResponseSink;
use crate::transport::Transport;

/// How one call's chain ended.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    /// The result went to the sink.
    Succeeded,
    /// Parked with the event listener under this handle.
    AsyncPending(AsyncHandle),
    /// An ordinary error went to the sink.
    Delivered(ServerError),
    /// A session-fatal error disconnected the client.
    Escalated(Signal),
    /// Disconnected or cancelled; the sink was not invoked.
    Dropped,
}

enum Step {
    Done(CallOutcome),
    Retry(PendingRequest),
}

/// Connectivity state, shared with the periodic credentials task.
struct Connection {
    session: Mutex<SessionAuthState>,
    /// `true` once disconnected. Never goes back.
    closed: watch::Sender<bool>,
    signals: broadcast::Sender<Signal>,
    listener: Arc<dyn EventListener>,
    credentials_task: Mutex<Option<JoinHandle<()>>>,
}

impl Connection {
    fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }

    fn disconnect(&self) -> bool {
        let first = self.closed.send_if_modified(|closed| !std::mem::replace(closed, true));
        if !first {
            return false;
        }
        self.session.lock().unwrap_or_else(PoisonError::into_inner).connected = false;
        self.abort_credentials_task();
        self.listener.stop();
        tracing::info!("disconnected from session");
        true
    }

    /// Applies a credentials update outcome. Returns false once the session
    /// is gone.
    fn apply_credentials(
        &self,
        update: &std::result::Result<CredentialsUpdate, RpcError>,
    ) -> bool {
        match update {
            Ok(CredentialsUpdate::Success) => tracing::debug!("credentials refreshed"),
            Ok(CredentialsUpdate::Failure) => {
                tracing::warn!("credentials update refused");
                self.escalate(Signal::Unauthorized);
            }
            Err(e) => tracing::error!(error = %e, "credentials update failed"),
        }
        !self.is_closed()
    }

    fn abort_credentials_task(&self) {
        let task = self.credentials_task.lock().unwrap_or_else(PoisonError::into_inner).take();
        if let Some(task) = task {
            task.abort();
        }
    }
}

/// RPC client for a remote session server.
///
/// Share it as `Arc<RemoteServer>`; every method takes `&self`.
pub struct RemoteServer {
    config: Config,
    base: String,
    transport: Arc<dyn Transport>,
    refresher: Arc<dyn CredentialRefresher>,
    ready: AtomicBool,
    conn: Arc<Connection>,
}

impl RemoteServer {
    pub(crate) fn from_parts(
        config: Config,
        transport: Arc<dyn Transport>,
        listener: Arc<dyn EventListener>,
        refresher: Arc<dyn CredentialRefresher>,
        signal_capacity: usize,
    ) -> Self {
        let (signals, _) = broadcast::channel(signal_capacity.max(1));
        let conn = Connection {
            session: Mutex::new(SessionAuthState::default()),
            closed: watch::Sender::new(false),
            signals,
            listener,
            credentials_task: Mutex::new(None),
        };
        Self {
            base: config.normalized_base(),
            config,
            transport,
            refresher,
            ready: AtomicBool::new(false),
            conn: Arc::new(conn),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn is_disconnected(&self) -> bool {
        self.conn.is_closed()
    }

    pub fn session_state(&self) -> SessionAuthState {
        self.conn.session.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Observers of escalations (e.g. to prompt for reauthentication).
    pub fn subscribe(&self) -> broadcast::Receiver<Signal> {
        self.conn.signals.subscribe()
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base
    }

    pub(crate) fn record_session(&self, info: &SessionInfo) {
        let mut session = self.conn.session.lock().unwrap_or_else(PoisonError::into_inner);
        session.record(info);
    }

    // ------------------------------------------------------------------
    //  Lifecycle
    // ------------------------------------------------------------------

    /// The workbench is fully initialized: start the event stream and, in
    /// server mode, keep credentials fresh in the background.
    pub fn mark_ready(&self, mode: SessionMode) {
        if self.ready.swap(true, Ordering::AcqRel) {
            return;
        }
        tracing::info!(?mode, "workbench ready");

        if mode == SessionMode::Server {
            self.schedule_credentials_update();
        }
        self.conn.listener.start();
    }

    fn schedule_credentials_update(&self) {
        let period = self.config.credentials_update_interval();
        if period.is_zero() {
            tracing::warn!("credentials update interval is zero; not scheduling");
            return;
        }
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("no tokio runtime; periodic credentials update disabled");
            return;
        };

        let refresher = Arc::clone(&self.refresher);
        let conn = Arc::downgrade(&self.conn);
        let task = runtime.spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // the first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let update = refresher.update().await;
                let Some(live) = conn.upgrade() else {
                    return;
                };
                if !live.apply_credentials(&update) {
                    return;
                }
            }
        });

        let mut slot = self.conn.credentials_task.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.replace(task) {
            previous.abort();
        }
    }

    /// One immediate credentials renewal attempt.
    ///
    /// A refused renewal disconnects with `Signal::Unauthorized`; a failed
    /// attempt is only logged.
    pub async fn update_credentials(&self) -> std::result::Result<CredentialsUpdate, RpcError> {
        let update = self.refresher.update().await;
        self.conn.apply_credentials(&update);
        update
    }

    /// Tears the session down. Returns false if it already was.
    pub fn disconnect(&self) -> bool {
        self.conn.disconnect()
    }

    /// Keeps events flowing. Ignored until the workbench is ready, since
    /// events must not arrive before it can handle them.
    pub fn ensure_listening_for_events(&self) {
        if self.is_ready() {
            self.conn.listener.ensure_listening(self.config.max_listen_attempts);
        }
    }

    // ------------------------------------------------------------------
    //  Generic call path
    // ------------------------------------------------------------------

    /// Sends `call`, routing its outcome to `sink`.
    ///
    /// Resolves once the call's own chain has ended: delivered, dropped,
    /// escalated, or parked with the event listener.
    pub async fn send(&self, call: Call, sink: Arc<dyn ResponseSink>) -> CallOutcome {
        let pending = PendingRequest {
            call: Arc::new(call),
            retry: RetryToken::first_attempt(),
            sink,
        };
        self.run(pending).await
    }

    /// Builds the `Call` and sends it.
    pub async fn call(
        &self,
        scope: &str,
        method: &str,
        params: Vec<Value>,
        sink: Arc<dyn ResponseSink>,
    ) -> Result<CallOutcome> {
        let call = Call::new(scope, method, params)?;
        Ok(self.send(call, sink).await)
    }

    /// Delivers the out-of-band completion of a parked async call through the
    /// same response path as an immediate reply.
    pub async fn complete_async(&self, pending: PendingRequest, response: Response) -> CallOutcome {
        match self.settle(pending, response).await {
            Step::Done(outcome) => outcome,
            Step::Retry(next) => self.run(next).await,
        }
    }

    async fn run(&self, mut pending: PendingRequest) -> CallOutcome {
        loop {
            let response = self.dispatch(&pending.call).await;
            match self.settle(pending, response).await {
                Step::Done(outcome) => return outcome,
                Step::Retry(next) => pending = next,
            }
        }
    }

    async fn dispatch(&self, call: &Call) -> Response {
        self.ensure_listening_for_events();

        let url = format!("{}{}", self.base, call.path());
        let (client_id, version) = {
            let session = self.conn.session.lock().unwrap_or_else(PoisonError::into_inner);
            (session.client_id.clone(), session.client_version)
        };
        let request = call.to_request().with_identity(client_id, version);

        tracing::debug!(%call, %url, "dispatching");
        match self.transport.send(&url, &request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(%call, error = %e, "transport failure");
                Response::Error(e.into_rpc_error())
            }
        }
    }

    fn should_drop(&self, pending: &PendingRequest) -> bool {
        self.is_disconnected() || pending.sink.cancelled()
    }

    async fn settle(&self, pending: PendingRequest, response: Response) -> Step {
        if self.should_drop(&pending) {
            tracing::debug!(call = %pending.call, "dropping response");
            return Step::Done(CallOutcome::Dropped);
        }

        match response {
            Response::Success { result, events_pending } => {
                pending.sink.on_response(result);
                if events_pending {
                    self.conn.listener.ensure_events();
                }
                Step::Done(CallOutcome::Succeeded)
            }
            Response::Async(handle) => {
                self.conn.listener.register_async_handle(handle.clone(), pending);
                Step::Done(CallOutcome::AsyncPending(handle))
            }
            Response::Error(error) => self.recover(pending, error).await,
        }
    }

    async fn recover(&self, mut pending: PendingRequest, error: RpcError) -> Step {
        if error.kind() == ErrorKind::Unauthorized && pending.retry.take().is_some() {
            match self.refresher.update().await {
                Ok(CredentialsUpdate::Success) => {
                    tracing::debug!(call = %pending.call, "credentials renewed; retrying once");
                    return Step::Retry(pending);
                }
                Ok(CredentialsUpdate::Failure) => {}
                Err(e) => tracing::error!(error = %e, "credentials update failed"),
            }
            return Step::Done(self.conn.escalate(Signal::Unauthorized));
        }

        match Signal::for_kind(error.kind()) {
            Some(signal) => Step::Done(self.conn.escalate(signal)),
            None => {
                let error = ServerError::new(pending.call.method(), error);
                pending.sink.on_error(error.clone());
                Step::Done(CallOutcome::Delivered(error))
            }
        }
    }

    // ------------------------------------------------------------------
    //  Future-shaped calls for the typed endpoint layer
    // ------------------------------------------------------------------

    /// Sends a call and decodes its result as `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        scope: &str,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T> {
        self.request_with(scope, method, params, CancelFlag::new()).await
    }

    /// Like `request`, with a flag the caller can trip to abandon delivery.
    pub async fn request_with<T: DeserializeOwned>(
        &self,
        scope: &str,
        method: &str,
        params: Vec<Value>,
        cancel: CancelFlag,
    ) -> Result<T> {
        let value = self.exchange(scope, method, params, cancel).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Sends a call whose result carries nothing.
    pub async fn notify(&self, scope: &str, method: &str, params: Vec<Value>) -> Result<()> {
        self.exchange(scope, method, params, CancelFlag::new()).await.map(drop)
    }

    /// Sends a call whose reply nobody reads. Resolves once the call's chain
    /// has ended, retry included; its reply and any error are dropped.
    pub async fn detach(&self, scope: &str, method: &str, params: Vec<Value>) -> Result<()> {
        let call = Call::new(scope, method, params)?;
        self.send(call, Arc::new(DetachedSink)).await;
        Ok(())
    }

    async fn exchange(
        &self,
        scope: &str,
        method: &str,
        params: Vec<Value>,
        cancel: CancelFlag,
    ) -> Result<Value> {
        let call = Call::new(scope, method, params)?;
        let (sink, rx) = ReplySink::channel(cancel);
        let mut closed = self.conn.closed.subscribe();
        self.send(call, sink).await;

        // a call parked with the listener may never complete once disconnected
        let reply = tokio::select! {
            biased;
            reply = rx => reply,
            _ = closed.wait_for(|closed| *closed) => return Err(Error::Disconnected),
        };

        match reply {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(error)) => Err(Error::Server(error)),
            Err(_) if self.is_disconnected() => Err(Error::Disconnected),
            Err(_) => Err(Error::Cancelled),
        }
    }
}

impl Drop for RemoteServer {
    fn drop(&mut self) {
        self.conn.abort_credentials_task();
    }
}
