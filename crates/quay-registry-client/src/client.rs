use crate::discovery::{
    ConfigSource, DEFAULT_PROXY_PATH, DiscoveryService, EnvConfig, PROXY_PATH_KEY, PROXY_SERVICE,
    StaticDiscovery,
};
use crate::http::{HttpFetch, ReqwestFetch};
use crate::types::{
    LabelsResponse, ManifestByDigestResponse, SecurityDetailsResponse, TagsResponse,
};
use crate::util::encode_get_params;
use anyhow::{Context, Result, bail};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Stateless client for Quay's repository metadata endpoints.
///
/// Every operation resolves the upstream base URL, issues exactly one GET,
/// and hands the parsed body back to the caller. Nothing is cached between
/// calls, so concurrent calls are fully independent; the base URL is
/// recomputed per call on purpose, trading a resolver round trip for a
/// client with no state to invalidate.
#[derive(Clone)]
pub struct QuayClient {
    discovery: Arc<dyn DiscoveryService>,
    config: Arc<dyn ConfigSource>,
    http: Arc<dyn HttpFetch>,
}

impl QuayClient {
    /// Create a client from its three capabilities.
    ///
    /// All three are explicit arguments; the client acquires nothing from
    /// ambient context.
    pub fn new(
        discovery: Arc<dyn DiscoveryService>,
        config: Arc<dyn ConfigSource>,
        http: Arc<dyn HttpFetch>,
    ) -> Self {
        Self {
            discovery,
            config,
            http,
        }
    }

    /// Build a client from `QUAY_PROXY_URL`, with the default reqwest
    /// transport and environment-backed configuration.
    ///
    /// Returns `Ok(None)` when `QUAY_PROXY_URL` is unset or blank.
    pub fn from_env() -> Result<Option<Self>> {
        let Ok(base_url) = std::env::var("QUAY_PROXY_URL") else {
            return Ok(None);
        };
        if base_url.trim().is_empty() {
            return Ok(None);
        }

        let discovery = StaticDiscovery::new(&base_url)?;
        Ok(Some(Self::new(
            Arc::new(discovery),
            Arc::new(EnvConfig),
            Arc::new(ReqwestFetch::new()?),
        )))
    }

    /// List active tags for a repository, optionally paged.
    ///
    /// Expired and deleted tags are never returned; the endpoint is always
    /// queried with `onlyActiveTags=true`. `page` and `limit` are omitted
    /// from the query string entirely when `None`.
    pub async fn get_tags(
        &self,
        org: &str,
        repo: &str,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<TagsResponse> {
        let base = self.base_url().await?;
        let query = encode_get_params([
            ("limit", limit.map(|v| v.to_string())),
            ("page", page.map(|v| v.to_string())),
            ("onlyActiveTags", Some(true.to_string())),
        ]);

        self.fetch_json(format!(
            "{base}/api/v1/repository/{org}/{repo}/tag/?{query}"
        ))
        .await
    }

    /// Labels attached to a manifest.
    pub async fn get_labels(&self, org: &str, repo: &str, digest: &str) -> Result<LabelsResponse> {
        let base = self.base_url().await?;
        self.fetch_json(format!(
            "{base}/api/v1/repository/{org}/{repo}/manifest/{digest}/labels"
        ))
        .await
    }

    /// Look up a manifest by its content digest.
    pub async fn get_manifest_by_digest(
        &self,
        org: &str,
        repo: &str,
        digest: &str,
    ) -> Result<ManifestByDigestResponse> {
        let base = self.base_url().await?;
        self.fetch_json(format!(
            "{base}/api/v1/repository/{org}/{repo}/manifest/{digest}"
        ))
        .await
    }

    /// Vulnerability scan report for a manifest digest.
    pub async fn get_security_details(
        &self,
        org: &str,
        repo: &str,
        digest: &str,
    ) -> Result<SecurityDetailsResponse> {
        let base = self.base_url().await?;
        let query = encode_get_params([("vulnerabilities", Some(true.to_string()))]);

        self.fetch_json(format!(
            "{base}/api/v1/repository/{org}/{repo}/manifest/{digest}/security?{query}"
        ))
        .await
    }

    /// Resolved proxy address plus the configured (or default) path prefix.
    async fn base_url(&self) -> Result<String> {
        let proxy_path = self
            .config
            .optional_string(PROXY_PATH_KEY)
            .unwrap_or_else(|| DEFAULT_PROXY_PATH.to_string());
        let base = self
            .discovery
            .base_url(PROXY_SERVICE)
            .await
            .context("failed to resolve proxy base URL")?;

        Ok(format!("{}{proxy_path}", base.trim_end_matches('/')))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        debug!(%url, "GET");
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let resp = self.http.fetch(&url, headers).await?;
        if !resp.status.is_success() {
            bail!(
                "failed to fetch data, status {}: {}",
                resp.status.as_u16(),
                resp.status_text()
            );
        }

        serde_json::from_slice(&resp.body).context("failed to parse response JSON")
    }
}
