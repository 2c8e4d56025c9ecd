//! Logging setup.
//!
//! Logs always go to stderr so they can never corrupt a WAV stream written to
//! stdout. `RUST_LOG` overrides the level chosen from the command line.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a run.
pub fn default_directive(verbose: bool, piping: bool) -> &'static str {
    if piping {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. Call once, from `main`.
pub fn init(verbose: bool, piping: bool) {
    let fallback = default_directive(verbose, piping);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
