//! # Transport Adapter
//!
//! The only place real network I/O happens. Everything above it talks to the
//! [`Transport`] trait so tests can swap in a scripted fake.
//!
//! No retries and no timeout policy beyond what the underlying client does by
//! default.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::error::NetworkError;
use super::request::{HttpMethod, NetworkRequest};

/// Raw outcome of one HTTP exchange, before any classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub bytes: Vec<u8>,
    pub status: u16,
}

impl RawResponse {
    pub fn new(status: u16, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            status,
        }
    }
}

/// A failure below HTTP: nothing came back that has a status code.
#[derive(Debug, Clone)]
pub enum TransportError {
    /// The request could not be sent or completed (connect, timeout, redirect loop).
    Request(String),
    /// Some other fault with a structured cause.
    Fault(Arc<dyn Error + Send + Sync>),
    /// A fault that only has a message.
    Other(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Request(msg) => write!(f, "request error: {msg}"),
            TransportError::Fault(cause) => write!(f, "transport fault: {cause}"),
            TransportError::Other(msg) => write!(f, "transport error: {msg}"),
        }
    }
}

impl Error for TransportError {}

impl From<TransportError> for NetworkError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Request(detail) => NetworkError::RequestFailed(detail),
            TransportError::Fault(cause) => NetworkError::UnknownError(cause),
            TransportError::Other(detail) => NetworkError::UnknownGenericError(detail),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() || err.is_redirect() {
            TransportError::Request(err.to_string())
        } else {
            TransportError::Fault(Arc::new(err))
        }
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a single HTTP exchange.
    async fn execute(&self, request: &NetworkRequest) -> Result<RawResponse, TransportError>;
}

/// Production transport backed by `reqwest`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured client (proxy, custom TLS roots, ...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &NetworkRequest) -> Result<RawResponse, TransportError> {
        let url = request.url();
        debug!("{} {}", request.method, url);

        let mut builder = self.client.request(to_reqwest_method(request.method), url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        debug!("Response status: {}, {} bytes", status, bytes.len());

        Ok(RawResponse::new(status, bytes.to_vec()))
    }
}
