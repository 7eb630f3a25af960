use crate::error::{CliError, Result};
use crate::{render, settings, ui};
use advice_client::{ApiClient, HomeApi};
use tokio::runtime::Runtime;

pub fn execute(config_path: String, id: String, json: bool, verbose: bool) -> Result<()> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(execute_async(config_path, id, json, verbose))
}

async fn execute_async(config_path: String, id: String, json: bool, verbose: bool) -> Result<()> {
    let config = settings::load(&config_path, verbose)?;
    let client = ApiClient::new(&config)?;

    if !json {
        ui::contacting(&format!("Loading home {id}"), client.api_root());
    }
    let homes = HomeApi::new(client);
    let home = homes
        .get_home(&id)
        .await
        .map_err(|err| CliError::from_api_failure(err, "loading home"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&home)?);
    } else {
        render::print_home(&home);
    }
    Ok(())
}
