use crate::error::{CliError, Result, ResultExt};
use crate::{form, render, settings, ui};
use advice_client::{
    build_controller, load_profile, ErrorCategory, HomeProfile, Phase, UserFriendlyError,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tokio::runtime::Runtime;

pub const DEFAULT_PROFILE_PATH: &str = "home-profile.toml";

#[derive(Debug, Clone)]
pub struct AdviseArgs {
    pub config_path: String,
    pub profile_path: Option<String>,
    pub interactive: bool,
    pub json: bool,
    pub verbose: bool,
}

pub fn execute(args: AdviseArgs) -> Result<()> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(execute_async(args))
}

async fn execute_async(args: AdviseArgs) -> Result<()> {
    let config = settings::load(&args.config_path, args.verbose)?;
    let profile = resolve_profile(&args)?;

    if !args.json {
        ui::heading("Home Profile");
        println!("{profile}");
    }

    let controller = build_controller(&config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Analyzing your home and generating recommendations...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    tokio::select! {
        _ = controller.generate_advice(&profile) => {}
        _ = interrupted() => {
            tracing::debug!("interrupted, cancelling advice request");
            controller.cancel();
        }
    }
    spinner.finish_and_clear();

    let state = controller.state();
    match (state.phase(), state.advice) {
        (Phase::Success, Some(advice)) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&advice)?);
            } else {
                render::print_advice(&advice);
            }
            Ok(())
        }
        _ => Err(CliError::Friendly(state.failure.unwrap_or_else(|| {
            UserFriendlyError::for_category(ErrorCategory::Unknown)
        }))),
    }
}

fn resolve_profile(args: &AdviseArgs) -> Result<HomeProfile> {
    if args.interactive {
        return form::prompt_profile();
    }

    let path = args
        .profile_path
        .clone()
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string());

    if !Path::new(&path).exists() {
        return Err(CliError::Other(format!(
            "Home profile {path} not found. Run `energy-advisor init` to create one, or use --interactive"
        )));
    }

    let profile =
        load_profile(&path).with_context(|| format!("Failed to read home profile {path}"))?;
    profile
        .validate()
        .with_context(|| format!("Home profile {path} is not valid"))?;
    Ok(profile)
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn interrupted() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
