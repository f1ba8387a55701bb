//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with the report on stdout.

use tracing_subscriber::EnvFilter;

/// Filter used with `-v`, overriding `RUST_LOG`.
const VERBOSE_FILTER: &str = "ansible_pp=debug,ansible_pp_render=debug";

/// Builds the log filter: `RUST_LOG` if set, else warnings only.
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global subscriber. Call once, at startup.
pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}
