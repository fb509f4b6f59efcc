use super::*;

/// Outcome of one ingestion run.
#[derive(Debug, Default)]
pub(crate) struct Report {
  /// Output type to the error that kept its file from being written.
  pub(crate) failed_writes: BTreeMap<String, String>,
  pub(crate) item_stats: Stats,
  /// Output type (`story`, `comment`, ..., `user`, `update`) to the file written.
  pub(crate) outputs: BTreeMap<String, String>,
  pub(crate) user_stats: Stats,
}
