use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Comment {
  #[serde(flatten)]
  pub(crate) header: Header,
  pub(crate) parent: u64,
  pub(crate) text: Option<String>,
}

impl Columnar for Comment {
  fn columns(rows: &[Self]) -> Vec<ArrayRef> {
    let mut columns =
      base_columns(ItemKind::Comment, rows.iter().map(|row| &row.header));

    columns.extend([
      optional_strings(rows.iter().map(|row| row.text.as_deref())),
      counts(rows.iter().map(|row| row.parent)),
    ]);

    columns
  }

  fn schema() -> SchemaRef {
    let mut fields = base_fields();

    fields.extend([
      Field::new("text", DataType::Utf8, true),
      Field::new("parent", DataType::UInt64, false),
    ]);

    Arc::new(Schema::new(fields))
  }
}

impl Comment {
  pub(crate) fn validate(&self) -> Result<(), ValidationError> {
    self.header.validate()?;

    ValidationError::check_positive("parent", self.parent)?;

    self
      .header
      .require_content(ItemKind::Comment, "text", self.text.as_deref())
  }
}
