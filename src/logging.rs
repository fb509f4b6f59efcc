use super::*;

/// Installs the global subscriber. Log lines go to stderr so stdout only
/// carries command output. `RUST_LOG` overrides the default `info` filter.
pub(crate) fn init() -> Result {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_ansi(io::stderr().is_terminal())
    .try_init()
    .map_err(|error| anyhow!("failed to initialize logging: {error}"))
}
