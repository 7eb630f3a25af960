use crate::error::{Result, ResultExt};
use advice_client::ClientConfig;

/// Resolve the client configuration: file (or defaults), then environment,
/// then the verbose flag which turns on traffic logging.
pub fn load(config_path: &str, verbose: bool) -> Result<ClientConfig> {
    let config = ClientConfig::load_or_default(config_path)
        .and_then(ClientConfig::apply_env_overrides)
        .with_context(|| format!("Failed to load configuration from {config_path}"))?;

    if verbose {
        Ok(config.with_development(true))
    } else {
        Ok(config)
    }
}
