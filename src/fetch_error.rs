use super::*;

#[derive(Debug, Error)]
pub(crate) enum FetchError {
  #[error("malformed response body from `{url}`")]
  Decode {
    source: serde_json::Error,
    url: String,
  },
  #[error(transparent)]
  Invalid(#[from] ValidationError),
  #[error("timed out waiting for a free connection")]
  PoolTimeout,
  #[error("request to `{url}` failed")]
  Request { source: reqwest::Error, url: String },
  #[error("`{url}` responded with {status}")]
  Status { status: StatusCode, url: String },
}

impl FetchError {
  /// Invalid payloads are permanent; everything else may clear up on retry.
  pub(crate) fn is_retryable(&self) -> bool {
    !matches!(self, Self::Invalid(_))
  }

  pub(crate) fn is_timeout(&self) -> bool {
    match self {
      Self::PoolTimeout => true,
      Self::Request { source, .. } => source.is_timeout(),
      Self::Decode { .. } | Self::Invalid(_) | Self::Status { .. } => false,
    }
  }
}
