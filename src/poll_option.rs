use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct PollOption {
  #[serde(flatten)]
  pub(crate) header: Header,
  pub(crate) poll: u64,
  pub(crate) score: Option<u64>,
  pub(crate) text: Option<String>,
}

impl Columnar for PollOption {
  fn columns(rows: &[Self]) -> Vec<ArrayRef> {
    let mut columns =
      base_columns(ItemKind::PollOption, rows.iter().map(|row| &row.header));

    columns.extend([
      optional_strings(rows.iter().map(|row| row.text.as_deref())),
      counts(rows.iter().map(|row| row.poll)),
      optional_counts(rows.iter().map(|row| row.score)),
    ]);

    columns
  }

  fn schema() -> SchemaRef {
    let mut fields = base_fields();

    fields.extend([
      Field::new("text", DataType::Utf8, true),
      Field::new("poll", DataType::UInt64, false),
      Field::new("score", DataType::UInt64, true),
    ]);

    Arc::new(Schema::new(fields))
  }
}

impl PollOption {
  pub(crate) fn validate(&self) -> Result<(), ValidationError> {
    self.header.validate()?;

    ValidationError::check_positive("poll", self.poll)?;

    self.header.require_content(
      ItemKind::PollOption,
      "text",
      self.text.as_deref(),
    )
  }
}
