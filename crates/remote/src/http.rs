//! # HTTP Transport
//!
//! Posts request envelopes as JSON over HTTP(S) with `reqwest`.

use std::time::Duration;

use jrpc::Request;
use jrpc::Response;

use crate::transport;
use crate::transport::Transport;
use crate::transport::TransportError;

/// Production transport: one `POST <url>` per call, JSON in, JSON out.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> transport::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::ConnectionLost(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wraps an already configured client (cookies, proxies, TLS roots).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn map_reqwest(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_decode() {
        TransportError::Decode(e.to_string())
    } else {
        TransportError::ConnectionLost(e.to_string())
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, url: &str, request: &Request) -> transport::Result<Response> {
        let reply = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest)?;

        let status = reply.status();
        let body = reply.bytes().await.map_err(map_reqwest)?;

        match Response::from_slice(&body) {
            // servers report rpc errors on error statuses too
            Ok(response @ Response::Error(_)) => Ok(response),
            _ if !status.is_success() => Err(TransportError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            }),
            Ok(response) => Ok(response),
            Err(e) => Err(TransportError::Decode(e.to_string())),
        }
    }
}
