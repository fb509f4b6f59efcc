use super::*;

/// A record a lookup can resolve to. Items report their variant so success
/// counts can be broken down per type.
pub(crate) trait Resolved {
  fn kind(&self) -> Option<ItemKind>;
}

impl Resolved for Item {
  fn kind(&self) -> Option<ItemKind> {
    Some(Item::kind(self))
  }
}

impl Resolved for User {
  fn kind(&self) -> Option<ItemKind> {
    None
  }
}

pub(crate) struct BatchProcessor<'a> {
  client: &'a Client,
  config: BatchConfig,
}

impl<'a> BatchProcessor<'a> {
  pub(crate) fn new(client: &'a Client, config: BatchConfig) -> Self {
    Self { client, config }
  }

  /// Resolves `keys` in chunks. Each key is isolated: a missing record or a
  /// failed lookup only bumps a counter in `stats`. Resolved records come
  /// back in input order.
  async fn resolve<'k, K, T, F, Fut>(
    &self,
    label: &str,
    keys: &'k [K],
    stats: &mut Stats,
    fetch: F,
  ) -> Vec<T>
  where
    K: Display,
    T: Resolved,
    F: Fn(&'k K) -> Fut,
    Fut: Future<Output = Result<Option<T>, FetchError>>,
  {
    let total = keys.len();

    let mut processed = 0;

    let mut resolved = Vec::with_capacity(total);

    for chunk in keys.chunks(self.config.batch_size.max(1)) {
      let outcomes = stream::iter(chunk.iter().map(&fetch))
        .buffered(self.config.concurrency.max(1))
        .collect::<Vec<_>>()
        .await;

      for (key, outcome) in chunk.iter().zip(outcomes) {
        match outcome {
          Ok(Some(record)) => {
            stats.record_success(record.kind());
            resolved.push(record);
          }
          Ok(None) => {
            debug!(%key, "{label} not found");
            stats.record_not_found();
          }
          Err(error) => {
            warn!(%key, %error, "failed to resolve {label}");
            stats.record_failure();
          }
        }
      }

      processed += chunk.len();

      #[allow(clippy::cast_precision_loss)]
      let progress = processed as f64 / total as f64 * 100.0;

      info!("{label} progress: {processed}/{total} ({progress:.1}%) | {stats}");

      if processed < total {
        sleep(self.config.delay).await;
      }
    }

    resolved
  }

  pub(crate) async fn resolve_items(
    &self,
    ids: &[u64],
    stats: &mut Stats,
  ) -> Vec<Item> {
    self
      .resolve("items", ids, stats, |id| self.client.fetch_item(*id))
      .await
  }

  pub(crate) async fn resolve_users(
    &self,
    names: &[String],
    stats: &mut Stats,
  ) -> Vec<User> {
    self
      .resolve("users", names, stats, |name| self.client.fetch_user(name))
      .await
  }
}
