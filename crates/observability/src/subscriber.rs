//! Tracing subscriber initialization.
//!
//! JSON logs with timestamps. The filter comes from `RUST_LOG` unless the
//! caller supplies directives explicitly.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Initialize tracing/logging for the process, filtered by `RUST_LOG`.
///
/// Safe to call multiple times (subsequent calls are no-ops). Returns `true`
/// if this call installed the global subscriber.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter)
}

/// Initialize tracing with explicit filter directives (e.g. `"organization=debug"`).
///
/// Returns `true` if this call installed the global subscriber, `false` if one
/// was already in place.
pub fn init_with_filter(directives: &str) -> bool {
    install(parse_filter(directives))
}

/// Invalid directives fall back to the default filter.
fn parse_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|err| {
        eprintln!("invalid tracing filter {directives:?}: {err}; falling back to {DEFAULT_FILTER}");
        EnvFilter::new(DEFAULT_FILTER)
    })
}

fn install(filter: EnvFilter) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("tracing subscriber installed");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialization_is_a_no_op() {
        let _first = init_with_filter("debug");
        assert!(!init_with_filter("debug"));
        assert!(!init());
    }

    #[test]
    fn invalid_directives_fall_back_to_default() {
        let filter = parse_filter("organization=loudest");
        assert_eq!(filter.to_string(), EnvFilter::new(DEFAULT_FILTER).to_string());

        let valid = parse_filter("organization=debug");
        assert_eq!(valid.to_string(), EnvFilter::new("organization=debug").to_string());
        assert_ne!(valid.to_string(), filter.to_string());
    }

    #[test]
    fn invalid_directives_still_leave_a_subscriber_installed() {
        let _installed = init_with_filter("organization=loudest");
        assert!(!init_with_filter("info"));
    }
}
