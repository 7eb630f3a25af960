use crate::error::{CliError, Result};
use crate::{settings, ui};
use advice_client::{ApiClient, HealthApi};
use tokio::runtime::Runtime;

pub fn execute(config_path: String, verbose: bool) -> Result<()> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(execute_async(config_path, verbose))
}

async fn execute_async(config_path: String, verbose: bool) -> Result<()> {
    let config = settings::load(&config_path, verbose)?;
    let client = ApiClient::new(&config)?;

    ui::contacting("Checking the advisor backend", client.api_root());
    let health = HealthApi::new(client)
        .check()
        .await
        .map_err(|err| CliError::from_api_failure(err, "checking service health"))?;

    if health.is_healthy() {
        ui::done("Advisor backend is healthy");
        Ok(())
    } else {
        Err(CliError::Other(format!(
            "Advisor backend reported status '{}'",
            health.status
        )))
    }
}
