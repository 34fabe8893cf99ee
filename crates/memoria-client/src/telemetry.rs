use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize basic tracing for binaries embedding the client.
///
/// Honors `RUST_LOG`; defaults to info-level output for the memoria crates.
pub fn init_telemetry() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "memoria=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}
