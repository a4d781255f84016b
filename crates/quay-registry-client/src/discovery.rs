use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use std::collections::HashMap;
use url::Url;

/// Logical upstream service every request is routed through.
pub const PROXY_SERVICE: &str = "proxy";

/// Configuration key holding the optional API path prefix override.
pub const PROXY_PATH_KEY: &str = "quay.proxyPath";

/// Path prefix appended to the resolved base URL when no override is set.
pub const DEFAULT_PROXY_PATH: &str = "/quay/api";

/// Resolves a logical upstream service name to a concrete base address.
///
/// The client resolves [`PROXY_SERVICE`] on every call; nothing is cached,
/// so a resolver backed by live service discovery may return a different
/// address between calls.
#[async_trait]
pub trait DiscoveryService: Send + Sync {
    async fn base_url(&self, service: &str) -> Result<String>;
}

/// Supplies optional string-valued configuration.
pub trait ConfigSource: Send + Sync {
    fn optional_string(&self, key: &str) -> Option<String>;
}

/// Discovery backed by a single fixed base URL.
#[derive(Debug, Clone)]
pub struct StaticDiscovery {
    base_url: String,
}

impl StaticDiscovery {
    pub fn new(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url)
            .with_context(|| format!("invalid base URL (expected https://...): {base_url}"))?;
        if url.host_str().is_none() {
            bail!("base URL missing host: {base_url}");
        }

        Ok(Self {
            base_url: url.as_str().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl DiscoveryService for StaticDiscovery {
    async fn base_url(&self, _service: &str) -> Result<String> {
        Ok(self.base_url.clone())
    }
}

/// In-memory configuration for embedders with fixed settings.
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    values: HashMap<String, String>,
}

impl StaticConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl ConfigSource for StaticConfig {
    fn optional_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Configuration read from the process environment.
///
/// Keys map to environment variables by splitting on `.` and camelCase
/// boundaries: `quay.proxyPath` is read from `QUAY_PROXY_PATH`. Blank
/// values count as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfig;

impl ConfigSource for EnvConfig {
    fn optional_string(&self, key: &str) -> Option<String> {
        std::env::var(env_var_name(key))
            .ok()
            .filter(|v| !v.trim().is_empty())
    }
}

fn env_var_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        match ch {
            '.' | '-' => out.push('_'),
            c if c.is_ascii_uppercase() => {
                out.push('_');
                out.push(c);
            }
            c => out.push(c.to_ascii_uppercase()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_discovery_strips_trailing_slash() {
        let d = StaticDiscovery::new("https://gateway.example.com/api/proxy/").unwrap();
        assert_eq!(d.base_url, "https://gateway.example.com/api/proxy");
    }

    #[test]
    fn static_discovery_rejects_unparseable_url() {
        let err = StaticDiscovery::new("not a url").unwrap_err();
        assert!(err.to_string().contains("invalid base URL"));
    }

    #[test]
    fn static_discovery_rejects_hostless_url() {
        let err = StaticDiscovery::new("unix:/run/quay.sock").unwrap_err();
        assert!(err.to_string().contains("missing host"));
    }

    #[test]
    fn env_var_name_splits_dots_and_camel_case() {
        assert_eq!(env_var_name("quay.proxyPath"), "QUAY_PROXY_PATH");
        assert_eq!(env_var_name("quay.uiUrl"), "QUAY_UI_URL");
    }

    #[test]
    fn static_config_returns_only_known_keys() {
        let cfg = StaticConfig::new().with(PROXY_PATH_KEY, "/custom/path");
        assert_eq!(
            cfg.optional_string(PROXY_PATH_KEY).as_deref(),
            Some("/custom/path")
        );
        assert_eq!(cfg.optional_string("quay.uiUrl"), None);
    }
}
