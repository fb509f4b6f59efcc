use super::*;

/// Pacing for identifier lookups.
///
/// Chunks are resolved one after another with `delay` between them, which is
/// the only backpressure applied to the remote API. `concurrency` bounds the
/// lookups in flight inside a single chunk.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BatchConfig {
  pub(crate) batch_size: usize,
  pub(crate) concurrency: usize,
  pub(crate) delay: Duration,
}

impl Default for BatchConfig {
  fn default() -> Self {
    Self {
      batch_size: 50,
      concurrency: 1,
      delay: Duration::from_millis(500),
    }
  }
}
