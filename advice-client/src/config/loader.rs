use crate::config::types::ClientConfig;
use crate::error::{AdviceError, Result};
use crate::profile::HomeProfile;
use std::path::Path;

/// Environment variables that override file settings
pub const ENV_BASE_URL: &str = "ENERGY_ADVISOR_BASE_URL";
pub const ENV_API_VERSION: &str = "ENERGY_ADVISOR_API_VERSION";
pub const ENV_TIMEOUT_SECONDS: &str = "ENERGY_ADVISOR_TIMEOUT_SECONDS";
pub const ENV_DEVELOPMENT: &str = "ENERGY_ADVISOR_DEV";

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClientConfig>;
    fn load_or_default<P: AsRef<Path>>(path: P) -> Result<ClientConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from a TOML file, failing if it is missing
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClientConfig> {
        let path_ref = path.as_ref();
        if !path_ref.exists() {
            return Err(AdviceError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)?;
        let config: ClientConfig = toml::from_str(&content).map_err(|e| {
            AdviceError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults when absent
    fn load_or_default<P: AsRef<Path>>(path: P) -> Result<ClientConfig> {
        if path.as_ref().exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!(
                path = %path.as_ref().display(),
                "config file not found, using defaults"
            );
            Ok(ClientConfig::default())
        }
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load configuration from a TOML file or use defaults if it does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_or_default(path)
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_BASE_URL) {
            self.base_url = url;
        }

        if let Some(version) = get(ENV_API_VERSION) {
            self.api_version = Some(version);
        }

        if let Some(raw) = get(ENV_TIMEOUT_SECONDS) {
            self.timeout_seconds = raw.trim().parse().map_err(|_| {
                AdviceError::invalid_config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_TIMEOUT_SECONDS, raw
                ))
            })?;
        }

        if let Some(raw) = get(ENV_DEVELOPMENT) {
            self.development = parse_flag(&raw).ok_or_else(|| {
                AdviceError::invalid_config(format!(
                    "{} must be a boolean flag, got '{}'",
                    ENV_DEVELOPMENT, raw
                ))
            })?;
        }

        Ok(self)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Load a home profile from TOML, or JSON when the file ends in `.json`
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<HomeProfile> {
    let path_ref = path.as_ref();
    let content = std::fs::read_to_string(path_ref)?;

    let is_json = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let profile = if is_json {
        serde_json::from_str(&content)?
    } else {
        toml::from_str(&content)?
    };

    Ok(profile)
}
