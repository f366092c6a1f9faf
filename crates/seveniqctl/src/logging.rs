//! Logging setup for seveniqctl
//!
//! Logs go to stderr so stdout stays clean for `--json` output.
//! Filter priority: `-v` (debug), then $SEVENIQ_LOG, then $RUST_LOG, then warn.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SEVENIQ_LOG";

pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Call once, from `main`.
pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_forces_debug() {
        assert_eq!(filter(true).to_string(), "debug");
    }

    #[test]
    fn test_init_installs_global_subscriber() {
        init(false);
        assert!(tracing::dispatcher::has_been_set());
        tracing::debug!("logging initialised");
    }
}
