//! Gateway configuration loading and logging setup

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use tf_shared::{AppConfig, LogFormat, LoggingConfig};

/// Load `.env` (if present) and read the application configuration
pub fn load() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();
    AppConfig::from_env().context("failed to load configuration")
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` overrides the configured level when set.
pub fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .context("invalid log filter")?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}
