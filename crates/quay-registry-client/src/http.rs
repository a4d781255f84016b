use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

/// Response carrier handed back by an [`HttpFetch`] implementation.
///
/// `body` is the raw payload; the client checks `status` before parsing it.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl FetchResponse {
    /// Reason phrase for the status, for error messages.
    pub fn status_text(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("unknown status")
    }
}

/// HTTP GET capability injected into the client.
///
/// Implementations own transport policy (TLS, redirects, timeouts); the
/// client imposes none of its own and never cancels an in-flight request.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn fetch(&self, url: &str, headers: HeaderMap) -> Result<FetchResponse>;
}

/// Default [`HttpFetch`] backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestFetch {
    http: reqwest::Client,
}

impl ReqwestFetch {
    pub fn new() -> Result<Self> {
        Self::new_with_headers(HeaderMap::new())
    }

    /// Create a fetcher with extra default headers (in addition to User-Agent).
    pub fn new_with_headers(extra: HeaderMap) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(concat!("quay-registry-client/", env!("CARGO_PKG_VERSION")))
                .context("invalid user-agent header")?,
        );
        headers.extend(extra);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { http })
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetch {
    async fn fetch(&self, url: &str, headers: HeaderMap) -> Result<FetchResponse> {
        let resp = self
            .http
            .get(url)
            .headers(headers)
            .send()
            .await
            .context("failed to call registry")?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .context("failed to read response body")?;

        Ok(FetchResponse {
            status,
            body: body.to_vec(),
        })
    }
}
