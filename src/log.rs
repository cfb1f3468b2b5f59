//! Logging setup
//!
//! Logs go to stderr so stdout carries only report text.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter
pub const LOG_ENV: &str = "DIRPEEK_LOG";

/// Pick the filter directive for the given verbosity
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "dirpeek=debug"
    } else {
        "warn"
    }
}

/// Install the global tracing subscriber
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();
}
