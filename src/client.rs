use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: Url,
  client: reqwest::Client,
  permits: Arc<Semaphore>,
  pool_timeout: Duration,
  retry: RetryPolicy,
}

impl Client {
  pub(crate) const API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

  pub(crate) async fn fetch_item(
    &self,
    id: u64,
  ) -> Result<Option<Item>, FetchError> {
    let value = self.get(self.url(&["item", &format!("{id}.json")])).await?;

    Ok(Item::from_value(value)?)
  }

  pub(crate) async fn fetch_max_item_id(&self) -> Result<u64, FetchError> {
    let url = self.url(&["maxitem.json"]);

    let value = self.get(url.clone()).await?;

    let id = serde_json::from_value::<u64>(value).map_err(|source| {
      FetchError::Decode {
        source,
        url: url.into(),
      }
    })?;

    ValidationError::check_positive("maxitem", id)?;

    Ok(id)
  }

  pub(crate) async fn fetch_updates(&self) -> Result<Updates, FetchError> {
    let value = self.get(self.url(&["updates.json"])).await?;

    Ok(Updates::from_value(value)?)
  }

  pub(crate) async fn fetch_user(
    &self,
    name: &str,
  ) -> Result<Option<User>, FetchError> {
    let value = self.get(self.url(&["user", &format!("{name}.json")])).await?;

    Ok(User::from_value(value)?)
  }

  /// GETs `url`, retrying failures per the configured policy. The last
  /// attempt's error is returned.
  async fn get(&self, url: Url) -> Result<Value, FetchError> {
    let mut attempt = 1;

    loop {
      let error = match self.try_get(&url).await {
        Ok(value) => return Ok(value),
        Err(error) => error,
      };

      if error.is_timeout() {
        warn!(%url, attempt, %error, "timeout accessing endpoint");
      } else {
        error!(%url, attempt, %error, "HTTP error accessing endpoint");
      }

      if !error.is_retryable() || attempt >= self.retry.attempts {
        return Err(error);
      }

      let delay = self.retry.delay(attempt);

      debug!(%url, attempt, ?delay, "retrying request");

      sleep(delay).await;

      attempt += 1;
    }
  }

  pub(crate) fn new(config: &ClientConfig) -> Result<Self> {
    let base_url = Url::parse(&config.base_url)
      .with_context(|| format!("invalid API base URL `{}`", config.base_url))?;

    if base_url.cannot_be_a_base() {
      bail!("API base URL `{base_url}` cannot have a path");
    }

    let client = reqwest::Client::builder()
      .connect_timeout(config.connect_timeout)
      .read_timeout(config.read_timeout)
      .timeout(config.request_timeout)
      .pool_max_idle_per_host(config.max_idle_connections)
      .build()
      .context("failed to build HTTP client")?;

    Ok(Self {
      base_url,
      client,
      permits: Arc::new(Semaphore::new(config.max_connections.max(1))),
      pool_timeout: config.pool_timeout,
      retry: config.retry,
    })
  }

  async fn try_get(&self, url: &Url) -> Result<Value, FetchError> {
    let _permit = timeout(self.pool_timeout, self.permits.acquire())
      .await
      .ok()
      .and_then(Result::ok)
      .ok_or(FetchError::PoolTimeout)?;

    let request_error = |source: reqwest::Error| FetchError::Request {
      source,
      url: url.to_string(),
    };

    let response = self
      .client
      .get(url.clone())
      .send()
      .await
      .map_err(request_error)?;

    let status = response.status();

    if !status.is_success() {
      return Err(FetchError::Status {
        status,
        url: url.to_string(),
      });
    }

    let body = response.bytes().await.map_err(request_error)?;

    if body.iter().all(u8::is_ascii_whitespace) {
      return Ok(Value::Null);
    }

    serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
      source,
      url: url.to_string(),
    })
  }

  /// Appends `segments` to the base URL. Each segment is percent-encoded,
  /// so `/`, `?` and `#` stay inside it.
  fn url(&self, segments: &[&str]) -> Url {
    let mut url = self.base_url.clone();

    if let Ok(mut path) = url.path_segments_mut() {
      path.pop_if_empty().extend(segments);
    }

    url
  }
}
