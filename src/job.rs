use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Job {
  #[serde(flatten)]
  pub(crate) header: Header,
  pub(crate) score: Option<u64>,
  pub(crate) text: Option<String>,
  pub(crate) title: Option<String>,
  pub(crate) url: Option<String>,
}

impl Columnar for Job {
  fn columns(rows: &[Self]) -> Vec<ArrayRef> {
    let mut columns =
      base_columns(ItemKind::Job, rows.iter().map(|row| &row.header));

    columns.extend([
      optional_strings(rows.iter().map(|row| row.title.as_deref())),
      optional_strings(rows.iter().map(|row| row.text.as_deref())),
      optional_strings(rows.iter().map(|row| row.url.as_deref())),
      optional_counts(rows.iter().map(|row| row.score)),
    ]);

    columns
  }

  fn schema() -> SchemaRef {
    let mut fields = base_fields();

    fields.extend([
      Field::new("title", DataType::Utf8, true),
      Field::new("text", DataType::Utf8, true),
      Field::new("url", DataType::Utf8, true),
      Field::new("score", DataType::UInt64, true),
    ]);

    Arc::new(Schema::new(fields))
  }
}

impl Job {
  pub(crate) fn validate(&self) -> Result<(), ValidationError> {
    self.header.validate()?;

    self
      .header
      .require_content(ItemKind::Job, "title", self.title.as_deref())
  }
}
