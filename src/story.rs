use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Story {
  pub(crate) descendants: Option<u64>,
  #[serde(flatten)]
  pub(crate) header: Header,
  pub(crate) score: Option<u64>,
  pub(crate) text: Option<String>,
  pub(crate) title: Option<String>,
  pub(crate) url: Option<String>,
}

impl Columnar for Story {
  fn columns(rows: &[Self]) -> Vec<ArrayRef> {
    let mut columns =
      base_columns(ItemKind::Story, rows.iter().map(|row| &row.header));

    columns.extend([
      optional_strings(rows.iter().map(|row| row.title.as_deref())),
      optional_strings(rows.iter().map(|row| row.url.as_deref())),
      optional_strings(rows.iter().map(|row| row.text.as_deref())),
      optional_counts(rows.iter().map(|row| row.score)),
      optional_counts(rows.iter().map(|row| row.descendants)),
    ]);

    columns
  }

  fn schema() -> SchemaRef {
    let mut fields = base_fields();

    fields.extend([
      Field::new("title", DataType::Utf8, true),
      Field::new("url", DataType::Utf8, true),
      Field::new("text", DataType::Utf8, true),
      Field::new("score", DataType::UInt64, true),
      Field::new("descendants", DataType::UInt64, true),
    ]);

    Arc::new(Schema::new(fields))
  }
}

impl Story {
  pub(crate) fn validate(&self) -> Result<(), ValidationError> {
    self.header.validate()?;

    self
      .header
      .require_content(ItemKind::Story, "title", self.title.as_deref())
  }
}
