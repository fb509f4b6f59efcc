use super::*;

#[derive(Clone, Debug)]
pub(crate) struct ClientConfig {
  pub(crate) base_url: String,
  pub(crate) connect_timeout: Duration,
  /// Upper bound on requests in flight at once.
  pub(crate) max_connections: usize,
  pub(crate) max_idle_connections: usize,
  /// How long a request may wait for one of `max_connections` to free up.
  pub(crate) pool_timeout: Duration,
  pub(crate) read_timeout: Duration,
  /// Whole-request deadline, which also bounds sending the request.
  pub(crate) request_timeout: Duration,
  pub(crate) retry: RetryPolicy,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      base_url: Client::API_BASE_URL.into(),
      connect_timeout: Duration::from_secs(5),
      max_connections: 20,
      max_idle_connections: 10,
      pool_timeout: Duration::from_secs(10),
      read_timeout: Duration::from_secs(60),
      request_timeout: Duration::from_secs(70),
      retry: RetryPolicy::default(),
    }
  }
}

impl ClientConfig {
  pub(crate) fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  #[cfg(test)]
  pub(crate) fn with_retry(mut self, retry: RetryPolicy) -> Self {
    self.retry = retry;
    self
  }
}
