use crate::error::{AdviceError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Default API root of a locally running backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Advice generation is slow, so requests get two minutes
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

/// Connection settings for the advisor API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root, e.g. `http://localhost:8000/api`
    pub base_url: String,
    /// Optional version segment appended to the base URL (`v1` -> `/api/v1`)
    pub api_version: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// Enables verbose request/response logging
    pub development: bool,
    /// User-Agent header sent with every request
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            development: cfg!(debug_assertions),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at `base_url` with default settings
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_api_version<S: Into<String>>(mut self, version: S) -> Self {
        self.api_version = Some(version.into());
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn with_development(mut self, development: bool) -> Self {
        self.development = development;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Base URL with the version segment applied and a trailing slash,
    /// ready for `Url::join` with relative endpoint paths.
    pub fn api_root(&self) -> Result<Url> {
        let mut root = self.base_url.trim_end_matches('/').to_string();
        if let Some(version) = self.api_version.as_deref().filter(|v| !v.is_empty()) {
            root.push('/');
            root.push_str(version);
        }
        root.push('/');
        Ok(Url::parse(&root)?)
    }

    /// Check that the configuration can be used to build a client
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            AdviceError::invalid_config(format!(
                "base_url '{}' is not a valid URL: {}",
                self.base_url, e
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AdviceError::invalid_config(format!(
                "base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.timeout_seconds == 0 {
            return Err(AdviceError::invalid_config(
                "timeout_seconds must be greater than 0",
            ));
        }

        if let Some(version) = &self.api_version {
            if version.contains('/') {
                return Err(AdviceError::invalid_config(format!(
                    "api_version '{}' must be a single path segment",
                    version
                )));
            }
        }

        Ok(())
    }
}
