use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise tracing for the preview tool.
///
/// Level comes from `RUST_LOG` (default `info`); output goes to stderr so
/// the rendered table on stdout stays clean.
pub fn initialize() -> anyhow::Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Cannot initialize tracing: {}", e))?;

    Ok(())
}
