//! HTTP transport seam.
//!
//! The catalog operations only ever need "GET this URL, give me the status and
//! the body". [`HttpClient`] captures exactly that so tests and embedders can
//! substitute their own transport; [`ReqwestHttpClient`] is the production
//! implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{ClientError, TransportError};

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code, or `None` when the transport answered with something
    /// that is not an HTTP response.
    pub status: Option<u16>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// `true` only for an HTTP response with status exactly 200.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == Some(200)
    }
}

/// Minimal async GET capability.
///
/// Implementations must not interpret the status: a 404 or 500 is a
/// successful `get` carrying that status. Only failures that prevent a
/// response from being obtained (DNS, connect, TLS, timeout) are errors.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}

/// [`HttpClient`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Builds a client with the given total timeout (`None` disables it) and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout: Option<Duration>, user_agent: &str) -> Result<Self, ClientError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(HttpResponse {
            status: Some(status),
            body: body.to_vec(),
        })
    }
}
