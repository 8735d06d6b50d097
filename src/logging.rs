//! Sets up logging for the command line tools.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global subscriber that writes human readable logs to stderr.
///
/// Logs at `default_level` and above are shown unless the `RUST_LOG`
/// environment variable is set, in which case its directives are used.
/// Logs go to stderr so that stdout only carries command output.
pub fn init_tracing(default_level: &str) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(default_level, rust_log.as_deref());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}

fn build_filter(default_level: &str, rust_log: Option<&str>) -> EnvFilter {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(default_level),
    }
}
