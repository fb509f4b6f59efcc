use super::*;

/// One pass of the pipeline: fetch the updates envelope, resolve the items
/// and profiles it names, and archive what resolved.
///
/// Only the updates fetch and building the output frames can fail a run.
/// Lookup failures are counted in the report, and a file that cannot be
/// written is recorded in `Report::failed_writes` without stopping the
/// remaining writes.
pub(crate) struct Ingestion<'a> {
  archive: &'a Archive,
  batch: BatchConfig,
  client: &'a Client,
  overwrite: bool,
  record_updates: bool,
}

impl<'a> Ingestion<'a> {
  fn advance(stage: Stage) -> Stage {
    let next = stage.next();
    info!(stage = %next, "entering stage");
    next
  }

  pub(crate) fn new(
    client: &'a Client,
    archive: &'a Archive,
    batch: BatchConfig,
  ) -> Self {
    Self {
      archive,
      batch,
      client,
      overwrite: false,
      record_updates: false,
    }
  }

  pub(crate) fn overwrite(mut self, overwrite: bool) -> Self {
    self.overwrite = overwrite;
    self
  }

  async fn persist(
    &self,
    report: &mut Report,
    name: &str,
    batch: &RecordBatch,
    timestamp: DateTime<Utc>,
  ) {
    let plural = plural(name);

    info!(rows = batch.num_rows(), "writing {plural}");

    match self
      .archive
      .write(&plural, timestamp, batch, self.overwrite)
      .await
    {
      Ok(location) => {
        info!(%location, "wrote {plural}");
        report.outputs.insert(name.to_owned(), location);
      }
      Err(error) => {
        error!(%error, "failed to write {plural}");
        report.failed_writes.insert(name.to_owned(), error.to_string());
      }
    }
  }

  pub(crate) fn record_updates(mut self, record_updates: bool) -> Self {
    self.record_updates = record_updates;
    self
  }

  pub(crate) async fn run(&self) -> Result<Report> {
    self.run_at(Utc::now()).await
  }

  /// Runs the pipeline with `timestamp` as the run timestamp shared by every
  /// output path and injected timestamp column.
  pub(crate) async fn run_at(&self, timestamp: DateTime<Utc>) -> Result<Report> {
    let mut report = Report::default();

    let processor = BatchProcessor::new(self.client, self.batch);

    let stage = Stage::FetchUpdates;

    info!(%stage, "starting ingestion");

    let updates = self
      .client
      .fetch_updates()
      .await
      .context("failed to fetch updates")?;

    if updates.is_empty() {
      info!("no updates available");
    } else {
      info!(
        items = updates.items.len(),
        profiles = updates.profiles.len(),
        batch_size = self.batch.batch_size,
        "processing updates"
      );
    }

    let stage = Self::advance(stage);

    let items = processor
      .resolve_items(&updates.items, &mut report.item_stats)
      .await;

    let stage = Self::advance(stage);

    let users = processor
      .resolve_users(&updates.profiles, &mut report.user_stats)
      .await;

    let stage = Self::advance(stage);

    if items.is_empty() && users.is_empty() {
      info!("no items or users were resolved, nothing to write");
    } else {
      let groups = ItemGroups::from(items);

      for (kind, batch) in groups
        .record_batches()
        .context("failed to build item frames")?
      {
        self
          .persist(&mut report, kind.as_str(), &batch, timestamp)
          .await;
      }

      if !users.is_empty() {
        let batch = User::to_record_batch(&users, timestamp)
          .context("failed to build user frame")?;

        self.persist(&mut report, "user", &batch, timestamp).await;
      }

      if self.record_updates {
        let batch = updates
          .to_record_batch(timestamp)
          .context("failed to build updates frame")?;

        self.persist(&mut report, "update", &batch, timestamp).await;
      }
    }

    let stage = Self::advance(stage);

    info!(
      %stage,
      outputs = report.outputs.len(),
      failed_writes = report.failed_writes.len(),
      "ingestion finished"
    );

    Ok(report)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    arrow::array::{Array, TimestampSecondArray},
    chrono::TimeZone,
    parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder,
    serde_json::json,
    std::fs::File,
    wiremock::{
      Mock, MockServer, ResponseTemplate,
      matchers::{method, path},
    },
  };

  fn batch_config() -> BatchConfig {
    BatchConfig {
      batch_size: 2,
      concurrency: 1,
      delay: Duration::ZERO,
    }
  }

  fn client(server: &MockServer) -> Client {
    Client::new(
      &ClientConfig::default()
        .with_base_url(server.uri())
        .with_retry(RetryPolicy::immediate()),
    )
    .unwrap()
  }

  fn read(location: &str) -> RecordBatch {
    let mut reader =
      ParquetRecordBatchReaderBuilder::try_new(File::open(location).unwrap())
        .unwrap()
        .build()
        .unwrap();

    let batch = reader.next().unwrap().unwrap();

    assert!(reader.next().is_none());

    batch
  }

  async fn respond(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
      .and(path(route))
      .respond_with(ResponseTemplate::new(200).set_body_json(body))
      .mount(server)
      .await;
  }

  async fn server() -> MockServer {
    let server = MockServer::start().await;

    respond(
      &server,
      "/updates.json",
      json!({"items": [1, 2, 3], "profiles": ["pg"]}),
    )
    .await;

    respond(
      &server,
      "/item/1.json",
      json!({
        "by": "pg",
        "id": 1,
        "score": 57,
        "time": 1_160_418_111,
        "title": "Y Combinator",
        "type": "story",
        "url": "http://ycombinator.com"
      }),
    )
    .await;

    respond(
      &server,
      "/item/2.json",
      json!({
        "by": "sama",
        "id": 2,
        "parent": 1,
        "text": "Congrats",
        "time": 1_160_418_628,
        "type": "comment"
      }),
    )
    .await;

    respond(
      &server,
      "/item/3.json",
      json!({"id": 3, "time": 1_160_419_000, "type": "launch"}),
    )
    .await;

    respond(
      &server,
      "/user/pg.json",
      json!({
        "about": "Bug fixer.",
        "created": 1_160_418_092,
        "id": "pg",
        "karma": 155_111,
        "submitted": [1]
      }),
    )
    .await;

    server
  }

  fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
  }

  #[tokio::test]
  async fn run_writes_one_file_per_resolved_type() {
    let server = server().await;

    let client = client(&server);

    let tempdir = tempfile::tempdir().unwrap();

    let archive = Archive::local(tempdir.path()).unwrap();

    let report = Ingestion::new(&client, &archive, batch_config())
      .run_at(timestamp())
      .await
      .unwrap();

    assert_eq!(
      report.outputs.keys().map(String::as_str).collect::<Vec<_>>(),
      vec!["comment", "story", "user"]
    );

    assert!(report.failed_writes.is_empty());

    assert_eq!(report.item_stats.success, 2);
    assert_eq!(report.item_stats.not_found, 1);
    assert_eq!(report.user_stats.success, 1);

    for (name, plural) in
      [("story", "stories"), ("comment", "comments"), ("user", "users")]
    {
      let location = &report.outputs[name];

      assert!(
        location.ends_with(&format!(
          "type={plural}/year=2024/month=01/day=15/20240115_103000.parquet"
        )),
        "{location}"
      );

      assert_eq!(read(location).num_rows(), 1, "{name}");
    }

    let users = read(&report.outputs["user"]);

    let fetched = users
      .column_by_name("timestamp")
      .unwrap()
      .as_any()
      .downcast_ref::<TimestampSecondArray>()
      .unwrap();

    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched.value(0), timestamp().timestamp());
  }

  #[tokio::test]
  async fn run_writes_nothing_for_empty_updates() {
    let server = MockServer::start().await;

    respond(&server, "/updates.json", json!({"items": [], "profiles": []}))
      .await;

    let client = client(&server);

    let tempdir = tempfile::tempdir().unwrap();

    let root = tempdir.path().join("data/raw");

    let archive = Archive::local(&root).unwrap();

    let report = Ingestion::new(&client, &archive, batch_config())
      .record_updates(true)
      .run_at(timestamp())
      .await
      .unwrap();

    assert!(report.outputs.is_empty());
    assert_eq!(report.item_stats.processed(), 0);
    assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
  }

  #[tokio::test]
  async fn run_writes_nothing_when_nothing_resolves() {
    let server = MockServer::start().await;

    respond(&server, "/updates.json", json!({"items": [9], "profiles": []}))
      .await;

    respond(&server, "/item/9.json", Value::Null).await;

    let client = client(&server);

    let tempdir = tempfile::tempdir().unwrap();

    let archive = Archive::local(tempdir.path()).unwrap();

    let report = Ingestion::new(&client, &archive, batch_config())
      .record_updates(true)
      .run_at(timestamp())
      .await
      .unwrap();

    assert!(report.outputs.is_empty());
    assert!(report.failed_writes.is_empty());
    assert_eq!(report.item_stats.not_found, 1);
    assert_eq!(fs::read_dir(tempdir.path()).unwrap().count(), 0);
  }

  #[tokio::test]
  async fn run_fails_on_partial_updates_envelope() {
    let server = MockServer::start().await;

    respond(&server, "/updates.json", json!({"items": [1]})).await;

    let client = client(&server);

    let tempdir = tempfile::tempdir().unwrap();

    let archive = Archive::local(tempdir.path()).unwrap();

    let error = Ingestion::new(&client, &archive, batch_config())
      .run_at(timestamp())
      .await
      .unwrap_err();

    assert!(matches!(
      error.downcast_ref::<FetchError>(),
      Some(FetchError::Invalid(ValidationError::Malformed(_)))
    ));
  }

  #[tokio::test]
  async fn run_fails_when_updates_cannot_be_fetched() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/updates.json"))
      .respond_with(ResponseTemplate::new(503))
      .mount(&server)
      .await;

    let client = client(&server);

    let tempdir = tempfile::tempdir().unwrap();

    let archive = Archive::local(tempdir.path()).unwrap();

    let error = Ingestion::new(&client, &archive, batch_config())
      .run_at(timestamp())
      .await
      .unwrap_err();

    assert_eq!(error.to_string(), "failed to fetch updates");
  }

  #[tokio::test]
  async fn rerun_with_same_timestamp_reports_conflicts() {
    let server = server().await;

    let client = client(&server);

    let tempdir = tempfile::tempdir().unwrap();

    let archive = Archive::local(tempdir.path()).unwrap();

    let ingestion = Ingestion::new(&client, &archive, batch_config());

    let first = ingestion.run_at(timestamp()).await.unwrap();

    let second = ingestion.run_at(timestamp()).await.unwrap();

    assert!(second.outputs.is_empty());

    assert_eq!(
      second.failed_writes.keys().collect::<Vec<_>>(),
      first.outputs.keys().collect::<Vec<_>>()
    );

    let third = ingestion
      .overwrite(true)
      .run_at(timestamp())
      .await
      .unwrap();

    assert_eq!(third.outputs, first.outputs);
    assert!(third.failed_writes.is_empty());
  }

  #[tokio::test]
  async fn run_records_updates_when_asked() {
    let server = server().await;

    let client = client(&server);

    let tempdir = tempfile::tempdir().unwrap();

    let archive = Archive::local(tempdir.path()).unwrap();

    let report = Ingestion::new(&client, &archive, batch_config())
      .record_updates(true)
      .run_at(timestamp())
      .await
      .unwrap();

    let location = &report.outputs["update"];

    assert!(location.contains("type=updates/year=2024/month=01/day=15"));

    let updates = read(location);

    assert_eq!(updates.num_rows(), 1);
    assert_eq!(updates.schema(), Updates::schema());
  }
}
