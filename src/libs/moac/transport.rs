//! HTTP plumbing behind [`MoacRpc`](super::client::MoacRpc).
//!
//! The client only needs "POST these bytes, give me the status and
//! body back".  [`ReqwestTransport`] does that over a blocking
//! `reqwest` client; tests and embedders can inject anything else
//! implementing [`HttpTransport`].
use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;

/// Failure reported by a transport, passed through to the caller as-is.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Status and full body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Anything that can perform one HTTP POST.  Implementations are
/// shared across threads by the client and must tolerate concurrent
/// calls.
pub trait HttpTransport: Send + Sync {
    fn post(&self, url: &str, content_type: &str, body: Vec<u8>)
        -> Result<HttpResponse, TransportError>;
}

/// Default transport over `reqwest::blocking`.
///
/// Must not be driven from inside an async runtime; `reqwest` panics
/// when its blocking client runs on a tokio worker thread.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    http: HttpClient,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    pub fn from_client(http: HttpClient) -> Self {
        Self { http }
    }
}

impl HttpTransport for ReqwestTransport {
    fn post(
        &self,
        url: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, TransportError> {
        let res = self
            .http
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()?;
        let status = res.status().as_u16();
        let bytes = res.bytes()?;
        Ok(HttpResponse {
            status,
            body: bytes.to_vec(),
        })
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for std::sync::Arc<T> {
    fn post(
        &self,
        url: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, TransportError> {
        (**self).post(url, content_type, body)
    }
}
