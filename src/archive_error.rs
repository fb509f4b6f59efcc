use super::*;

#[derive(Debug, Error)]
pub(crate) enum ArchiveError {
  #[error("`{location}` already exists and overwriting is disabled")]
  AlreadyExists { location: String },
  #[error("failed to encode record batch as parquet")]
  Encode(#[from] ParquetError),
  #[error("invalid archive path `{key}`")]
  Path {
    key: String,
    source: object_store::path::Error,
  },
  #[error("failed to write `{location}`")]
  Store {
    location: String,
    source: object_store::Error,
  },
}
