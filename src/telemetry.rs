//! Telemetry initialization (tracing, fmt subscriber, etc.)
//!
//! Sets up `tracing-subscriber` with console output and an `EnvFilter` driven
//! by `RUST_LOG` (defaulting to `info`). Per-request spans come from the
//! `tower-http` trace layer applied to the router.

use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize tracing for the process.
///
/// Call once at startup, before the application is constructed, so that
/// connection setup and configuration problems are captured.
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    info!("Telemetry initialized");

    Ok(())
}
