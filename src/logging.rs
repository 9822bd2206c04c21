//! Diagnostic logging.
//!
//! Logs go to stderr so `envgen list` output on stdout stays clean. The
//! filter comes from `ENVGEN_LOG` (same syntax as `RUST_LOG`); without it the
//! level is `warn`, or `debug` for envgen itself when `--verbose` is set.
//! Parameter values are never logged.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "ENVGEN_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,envgen=debug" } else { "warn" }
}
