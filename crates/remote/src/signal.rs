//! Session-wide signals raised when a call escalates to a disconnect.

use std::fmt;

use jrpc::ErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Authorization is gone and could not be renewed.
    Unauthorized,
    /// Another client took over the session.
    ClientDisconnected,
    /// The client build no longer matches the server.
    InvalidClientVersion,
    /// The server is going away.
    ServerOffline,
}

impl Signal {
    /// The signal a session-fatal error kind escalates to.
    pub fn for_kind(kind: ErrorKind) -> Option<Self> {
        match kind {
            ErrorKind::Unauthorized => Some(Self::Unauthorized),
            ErrorKind::InvalidClientId => Some(Self::ClientDisconnected),
            ErrorKind::InvalidClientVersion => Some(Self::InvalidClientVersion),
            ErrorKind::ServerOffline => Some(Self::ServerOffline),
            ErrorKind::Other => None,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unauthorized => "unauthorized",
            Self::ClientDisconnected => "client disconnected",
            Self::InvalidClientVersion => "invalid client version",
            Self::ServerOffline => "server offline",
        };
        f.write_str(name)
    }
}
