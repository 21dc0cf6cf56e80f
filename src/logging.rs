/// Logging setup: `tracing` events to stderr, filtered by `GH_RUNS_LOG`.
use std::io;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::gh::config::vars;

/// Filter used when `GH_RUNS_LOG` is unset: quiet unless something went wrong.
const DEFAULT_FILTER: &str = "warn";
/// Filter used with `--debug`.
const DEBUG_FILTER: &str = "gh_runs=debug,warn";

/// Pick the filter directives: `--debug` wins, then a valid `GH_RUNS_LOG`,
/// then the default.
fn directives(debug: bool, env_value: Option<&str>) -> String {
    if debug {
        return DEBUG_FILTER.to_owned();
    }
    env_value
        .filter(|v| EnvFilter::try_new(v).is_ok())
        .unwrap_or(DEFAULT_FILTER)
        .to_owned()
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(debug: bool) {
    let env_value = std::env::var(vars::LOG).ok();
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(directives(debug, env_value.as_deref())))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(debug)
                .without_time(),
        )
        .try_init();
}
