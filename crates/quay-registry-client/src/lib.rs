//! Typed client for a subset of the Quay container-registry REST API.
//!
//! This crate is a thin, stateless facade over Quay's `/api/v1` repository
//! endpoints:
//! - tag listing (`.../tag/`, active tags only)
//! - manifest labels (`.../manifest/{digest}/labels`)
//! - manifest lookup by digest (`.../manifest/{digest}`)
//! - security scan details (`.../manifest/{digest}/security`)
//!
//! Each call performs exactly one HTTP round trip. There is no caching, no
//! retry, and no cross-call state; that is deliberate, not an oversight.
//! Adding hidden statefulness here needs a design review first.
//!
//! The client is wired from three injected capabilities: a
//! [`DiscoveryService`] that resolves the logical `proxy` upstream to a base
//! address, a [`ConfigSource`] that may override the API path prefix
//! (default `/quay/api`), and an [`HttpFetch`] transport.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use quay_registry_client::{QuayClient, ReqwestFetch, StaticConfig, StaticDiscovery};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = QuayClient::new(
//!     Arc::new(StaticDiscovery::new("https://gateway.example.com/api/proxy")?),
//!     Arc::new(StaticConfig::new()),
//!     Arc::new(ReqwestFetch::new()?),
//! );
//!
//! let tags = client.get_tags("projectquay", "clair", None, Some(20)).await?;
//! for tag in &tags.tags {
//!     println!("{} -> {:?}", tag.name, tag.manifest_digest);
//! }
//! # Ok(()) }
//! ```

mod client;
mod discovery;
mod http;
mod types;
mod util;

pub use client::QuayClient;
pub use discovery::{
    ConfigSource, DEFAULT_PROXY_PATH, DiscoveryService, EnvConfig, PROXY_PATH_KEY, PROXY_SERVICE,
    StaticConfig, StaticDiscovery,
};
pub use http::{FetchResponse, HttpFetch, ReqwestFetch};
pub use types::*;
pub use util::encode_get_params;
