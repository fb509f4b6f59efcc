use super::*;

/// Append-only store of partitioned parquet files.
///
/// Files live at `<base>/type=<plural>/year=Y/month=MM/day=DD/<stamp>.parquet`
/// on the local filesystem, or under the same key in an S3 bucket.
pub(crate) struct Archive {
  base: String,
  bucket: Option<String>,
  /// Key prefix inside `store`. Empty for a local store, which is rooted at
  /// `base` already.
  prefix: String,
  store: Arc<dyn ObjectStore>,
}

impl Archive {
  const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

  fn encode(batch: &RecordBatch) -> Result<Vec<u8>, ParquetError> {
    let properties = WriterProperties::builder()
      .set_compression(Compression::SNAPPY)
      .set_created_by(format!("hn-ingest {}", env!("CARGO_PKG_VERSION")))
      .build();

    let mut writer =
      ArrowWriter::try_new(Vec::new(), batch.schema(), Some(properties))?;

    writer.write(batch)?;

    writer.into_inner()
  }

  /// Roots an archive at `root` on the local filesystem, creating it if
  /// needed.
  pub(crate) fn local(root: &Path) -> Result<Self> {
    fs::create_dir_all(root).with_context(|| {
      format!("failed to create output directory `{}`", root.display())
    })?;

    let root = fs::canonicalize(root).with_context(|| {
      format!("failed to resolve output directory `{}`", root.display())
    })?;

    let store = LocalFileSystem::new_with_prefix(&root).with_context(|| {
      format!("failed to open output directory `{}`", root.display())
    })?;

    Ok(Self {
      base: root.to_string_lossy().into_owned(),
      bucket: None,
      prefix: String::new(),
      store: Arc::new(store),
    })
  }

  /// Where a file for `plural` written at `timestamp` ends up, as an object
  /// key and as a user-facing location.
  fn locate(
    &self,
    plural: &str,
    timestamp: DateTime<Utc>,
  ) -> Result<(ObjectPath, String), ArchiveError> {
    let file = format!("{}.parquet", timestamp.format(Self::FILE_STAMP_FORMAT));

    let key = format!(
      "{}/{file}",
      partition_path(&self.prefix, plural, timestamp, None)
    );

    let location = format!(
      "{}/{file}",
      partition_path(&self.base, plural, timestamp, self.bucket.as_deref())
    );

    let key = ObjectPath::parse(&key)
      .map_err(|source| ArchiveError::Path { key, source })?;

    Ok((key, location))
  }

  pub(crate) fn s3(base: &str, bucket: &str) -> Result<Self> {
    let store = AmazonS3Builder::from_env()
      .with_bucket_name(bucket)
      .build()
      .with_context(|| format!("failed to configure bucket `{bucket}`"))?;

    let prefix = base.trim_matches('/').to_owned();

    Ok(Self {
      base: prefix.clone(),
      bucket: Some(bucket.to_owned()),
      prefix,
      store: Arc::new(store),
    })
  }

  /// Writes `batch` as the `plural` file for `timestamp` and returns its
  /// location. An existing file is only replaced when `overwrite` is set.
  pub(crate) async fn write(
    &self,
    plural: &str,
    timestamp: DateTime<Utc>,
    batch: &RecordBatch,
    overwrite: bool,
  ) -> Result<String, ArchiveError> {
    let (key, location) = self.locate(plural, timestamp)?;

    let data = Self::encode(batch)?;

    let size = data.len();

    let options = PutOptions {
      mode: if overwrite {
        PutMode::Overwrite
      } else {
        PutMode::Create
      },
      ..PutOptions::default()
    };

    debug!(%location, size, rows = batch.num_rows(), "uploading parquet file");

    match self.store.put_opts(&key, PutPayload::from(data), options).await {
      Ok(_) => Ok(location),
      Err(object_store::Error::AlreadyExists { .. }) => {
        Err(ArchiveError::AlreadyExists { location })
      }
      Err(source) => Err(ArchiveError::Store { location, source }),
    }
  }
}
