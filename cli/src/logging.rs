use tracing_subscriber::EnvFilter;

const VERBOSE_FILTER: &str = "advice_client=debug,energy_advisor=debug";

/// Install the stderr subscriber. `RUST_LOG` wins over the verbose flag.
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { "off" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
