//! Tracing setup for the CLI
//!
//! Structured logs are the only observability channel; the pipelines also
//! use them as the fallback delivery channel for undeliverable reports.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise the verbosity count from the CLI
/// picks the default level (info, debug, trace).
pub fn init_telemetry(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
