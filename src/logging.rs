//! Tracing subscriber setup for the greeter CLI
//!
//! Logs always go to stderr: stdout carries exactly the two program output
//! lines (greeting and sum report), and mixing log events into it would
//! break anything consuming that output through a pipe.
//!
//! Verbosity is controlled through the standard `RUST_LOG` environment
//! variable, falling back to the level the caller passes in.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Build the env filter from `RUST_LOG`, falling back to `default_level`.
pub fn create_base_env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize the global tracing subscriber.
///
/// # Arguments
/// * `default_level` - Optional default log level (e.g., "info", "warn").
///   If None, defaults to "warn" so an interactive session stays quiet.
pub fn init_logging(default_level: Option<&str>) {
    let default = default_level.unwrap_or("warn");
    let env_filter = create_base_env_filter(default);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_filter_uses_default_level() {
        // With RUST_LOG unset the fallback string must parse cleanly.
        let filter = create_base_env_filter("warn");
        assert!(!filter.to_string().is_empty());
    }
}
