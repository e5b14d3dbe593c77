//! Observability and tracing configuration.

use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const fn default_log_level() -> &'static str {
    "info,vantage_server=debug,vantage_postgres=debug"
}

#[must_use]
fn build_env_filter() -> tracing_subscriber::EnvFilter {
    let current =
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_log_level().to_string());

    let env = format!("{current},tower=info,tower_http=info");
    tracing_subscriber::EnvFilter::new(env)
}

/// Initializes the tracing subscriber for the application.
///
/// This sets up structured logging with environment-based filtering and
/// pretty formatting for development.
///
/// # Configuration
///
/// The log level can be configured via the `RUST_LOG` environment variable.
/// Defaults to `info` for dependencies and `debug` for the `vantage_server`
/// and `vantage_postgres` targets.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn initialize_tracing() -> anyhow::Result<()> {
    let env_filter = build_env_filter();
    let fmt_layer = layer().pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
