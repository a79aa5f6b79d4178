use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use super::config::LogConfig;

/// `RUST_LOG` wins over the configured level; an unparsable level falls
/// back to `info`
pub fn build_filter(log: &LogConfig) -> EnvFilter {
  EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new(&log.level))
    .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global tracing subscriber
///
/// Fails if a subscriber is already installed.
pub fn init(log: &LogConfig) -> anyhow::Result<()> {
  let filter = build_filter(log);

  if log.json {
    tracing_subscriber::registry()
      .with(filter)
      .with(fmt::layer().json().with_current_span(true).with_span_list(false))
      .try_init()?;
  } else {
    tracing_subscriber::registry()
      .with(filter)
      .with(fmt::layer().with_target(true))
      .try_init()?;
  }

  Ok(())
}
