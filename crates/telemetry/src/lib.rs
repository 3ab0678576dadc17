//! Tracing subscriber bootstrap for bookstore binaries.

use bookstore_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::EnvFilter;

/// Builds the level filter: `RUST_LOG` wins, otherwise the configured level.
pub fn env_filter(settings: &TelemetrySettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level))
}

/// Install the global fmt subscriber.
///
/// Returns `false` when a subscriber was already installed, which happens when
/// tests or embedding applications bootstrap more than once.
pub fn init(settings: &TelemetrySettings) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = match settings.log_format {
        LogFormat::Pretty => builder.pretty().try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    };

    if installed {
        tracing::debug!(
            target: "bookstore-telemetry",
            format = ?settings.log_format,
            level = %settings.level,
            "telemetry initialized"
        );
    }

    installed
}
