use crate::config::ClientConfig;
use crate::error::Result;
use url::Url;
use urlencoding::encode;

/// Resolves endpoint paths against the configured API root
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    root: Url,
}

impl UrlBuilder {
    /// Create a new URL builder from client configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            root: config.api_root()?,
        })
    }

    /// API root, always ending in `/`
    pub fn root(&self) -> &Url {
        &self.root
    }

    /// Build the absolute URL for an endpoint path
    pub fn build(&self, path: &str) -> Result<Url> {
        Ok(self.root.join(path)?)
    }
}

/// Relative paths of the advisor API endpoints
pub mod paths {
    use super::encode;

    /// Served from the server origin, outside the API prefix
    pub const HEALTH: &str = "/health";

    pub fn homes() -> String {
        "homes".to_string()
    }

    pub fn home(id: &str) -> String {
        format!("homes/{}", encode(id))
    }

    pub fn advice(home_id: &str) -> String {
        format!("homes/{}/advice", encode(home_id))
    }
}
