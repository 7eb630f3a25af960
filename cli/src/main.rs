mod advise;
mod cli;
mod error;
mod form;
mod health;
mod home;
mod init;
mod logging;
mod render;
mod settings;
mod ui;

use advise::AdviseArgs;
use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Advise {
            profile,
            interactive,
            json,
        } => advise::execute(AdviseArgs {
            config_path: cli.config,
            profile_path: profile,
            interactive,
            json,
            verbose: cli.verbose,
        }),
        Commands::Home { id, json } => home::execute(cli.config, id, json, cli.verbose),
        Commands::Health => health::execute(cli.config, cli.verbose),
        Commands::Init { profile, force } => init::execute(cli.config, profile, force),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
