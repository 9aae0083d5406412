//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set. Otherwise the crate behind
/// `bin_name` and `tower_http` log at `default_level`.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(default_directives(bin_name, default_level))
    });

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();

    if let Err(e) = result {
        // A subscriber was already installed (e.g. by a test harness).
        tracing::debug!("Logger already initialized: {}", e);
    }
}

fn default_directives(bin_name: &str, default_level: &str) -> String {
    let crate_target = bin_name.replace('-', "_");
    format!("{crate_target}={default_level},tower_http={default_level},axum::rejection=trace")
}
