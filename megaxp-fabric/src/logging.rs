//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use megaxp_core::config::{GeneralConfig, LogFormat};

/// Filter used when `level` does not parse.
const FALLBACK_LEVEL: &str = "info";

/// Build the filter: `RUST_LOG` wins, then `level`, then `info`.
#[must_use]
pub fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

/// Install a global fmt subscriber at the configured level and format.
///
/// Returns `false` if the host already installed one, which is left alone.
pub fn init(config: &GeneralConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(&config.log_level))
        .with_target(true);
    match config.log_format {
        LogFormat::Text => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    }
}
