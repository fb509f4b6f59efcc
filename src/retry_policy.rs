use super::*;

/// Exponential backoff between attempts, clamped to `[min_delay, max_delay]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RetryPolicy {
  pub(crate) attempts: u32,
  pub(crate) max_delay: Duration,
  pub(crate) min_delay: Duration,
  pub(crate) multiplier: Duration,
}

impl Default for RetryPolicy {
  fn default() -> Self {
    Self {
      attempts: 3,
      max_delay: Duration::from_secs(10),
      min_delay: Duration::from_secs(4),
      multiplier: Duration::from_secs(1),
    }
  }
}

impl RetryPolicy {
  /// How long to wait after the given 1-based attempt has failed.
  pub(crate) fn delay(&self, attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(31);

    self
      .multiplier
      .saturating_mul(1 << exponent)
      .max(self.min_delay)
      .min(self.max_delay)
  }

  #[cfg(test)]
  pub(crate) fn immediate() -> Self {
    Self {
      attempts: 3,
      max_delay: Duration::ZERO,
      min_delay: Duration::ZERO,
      multiplier: Duration::ZERO,
    }
  }
}
