use super::*;

/// Per-run resolution counters.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Stats {
  pub(crate) failed: usize,
  pub(crate) not_found: usize,
  pub(crate) success: usize,
  pub(crate) success_by_kind: BTreeMap<ItemKind, usize>,
}

impl Display for Stats {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "success: {} ({:.1}%)",
      self.success,
      self.success_rate()
    )?;

    if !self.success_by_kind.is_empty() {
      let breakdown = ItemKind::ALL
        .iter()
        .map(|kind| format!("{}={}", plural(kind.as_str()), self.successes(*kind)))
        .collect::<Vec<_>>()
        .join(", ");

      write!(f, " | by type: {breakdown}")?;
    }

    write!(f, " | failed: {} | not found: {}", self.failed, self.not_found)
  }
}

impl Stats {
  pub(crate) fn processed(&self) -> usize {
    self.success + self.not_found + self.failed
  }

  pub(crate) fn record_failure(&mut self) {
    self.failed += 1;
  }

  pub(crate) fn record_not_found(&mut self) {
    self.not_found += 1;
  }

  pub(crate) fn record_success(&mut self, kind: Option<ItemKind>) {
    self.success += 1;

    if let Some(kind) = kind {
      *self.success_by_kind.entry(kind).or_default() += 1;
    }
  }

  #[allow(clippy::cast_precision_loss)]
  pub(crate) fn success_rate(&self) -> f64 {
    match self.processed() {
      0 => 0.0,
      processed => self.success as f64 / processed as f64 * 100.0,
    }
  }

  pub(crate) fn successes(&self, kind: ItemKind) -> usize {
    self.success_by_kind.get(&kind).copied().unwrap_or_default()
  }
}
