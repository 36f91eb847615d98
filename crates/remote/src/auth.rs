//! # Credential Refresh Seam
//!
//! How the client renews authorization without bothering the user. The
//! refresher is asked once per `UNAUTHORIZED` call that still holds its retry,
//! and periodically in server mode.

use jrpc::RpcError;

/// Outcome of a refresh attempt that reached the auth endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsUpdate {
    /// Credentials were renewed; the failed call may be retried.
    Success,
    /// The server refused to renew; the user has to sign in again.
    Failure,
}

#[async_trait::async_trait]
pub trait CredentialRefresher: Send + Sync + 'static {
    /// Attempts one silent renewal.
    ///
    /// `Err` means the attempt itself failed; the client treats it like
    /// `Ok(CredentialsUpdate::Failure)`.
    async fn update(&self) -> Result<CredentialsUpdate, RpcError>;
}

/// Refresher for sessions that cannot renew credentials (desktop mode).
#[derive(Debug, Default)]
pub struct NoRefresh;

#[async_trait::async_trait]
impl CredentialRefresher for NoRefresh {
    async fn update(&self) -> Result<CredentialsUpdate, RpcError> {
        Ok(CredentialsUpdate::Failure)
    }
}
