//! Logging setup
//!
//! The router emits `tracing` events; applications install a subscriber once
//! at startup. `RUST_LOG` wins over the filter passed in.

use tracing_subscriber::EnvFilter;

/// Install a formatted subscriber with an env filter
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let _ = init_logging("navigable_router=debug");
        assert!(!init_logging("navigable_router=debug"));
    }
}
