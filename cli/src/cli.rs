use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "energy-advisor")]
#[command(
    author,
    version,
    about = "Get personalised energy-saving advice for your home"
)]
pub struct Cli {
    /// Client configuration file (defaults are used when it does not exist)
    #[clap(short, long, global = true, default_value = "energy-advisor.toml")]
    pub config: String,

    /// Enable verbose output, including request and response logging
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a home profile and show the recommended improvements
    Advise {
        /// Home profile file (TOML, or JSON with a .json extension)
        #[clap(short, long)]
        profile: Option<String>,

        /// Fill in the home profile with interactive prompts
        #[clap(short, long, default_value_t = false)]
        interactive: bool,

        /// Print the advice as JSON instead of a table
        #[clap(long, default_value_t = false)]
        json: bool,
    },

    /// Show a stored home profile
    Home {
        /// Identifier returned when the home was created
        id: String,

        /// Print the home as JSON
        #[clap(long, default_value_t = false)]
        json: bool,
    },

    /// Check that the advisor backend is reachable
    Health,

    /// Create template configuration and home profile files
    Init {
        /// Home profile template path
        #[clap(long, default_value = "home-profile.toml")]
        profile: String,

        /// Overwrite files that already exist
        #[clap(short, long, default_value_t = false)]
        force: bool,
    },
}
