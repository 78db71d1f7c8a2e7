use tracing_subscriber::EnvFilter;

/// Workspace crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &[
    "taqvim",
    "taqvim_calendar",
    "taqvim_config",
    "taqvim_search",
    "taqvim_solar",
    "taqvim_time",
];

/// Install the global subscriber for a `-v` count.
///
/// 0 is warn, 1 info, 2 debug, 3 or more trace. `RUST_LOG` takes precedence
/// when set.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
