use super::*;

/// Fields every item carries regardless of its type.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Header {
  pub(crate) by: Option<String>,
  #[serde(default)]
  pub(crate) dead: bool,
  #[serde(default)]
  pub(crate) deleted: bool,
  pub(crate) id: u64,
  #[serde(default)]
  pub(crate) kids: Vec<u64>,
  #[serde(deserialize_with = "deserialize_timestamp")]
  pub(crate) time: DateTime<Utc>,
}

impl Header {
  /// A live item must carry its content field. Deleted items are exempt
  /// since the remote source strips their content.
  pub(crate) fn require_content(
    &self,
    kind: ItemKind,
    field: &'static str,
    value: Option<&str>,
  ) -> Result<(), ValidationError> {
    if self.deleted || value.is_some_and(|value| !value.is_empty()) {
      return Ok(());
    }

    Err(ValidationError::MissingContent {
      field,
      id: self.id,
      kind,
    })
  }

  pub(crate) fn validate(&self) -> Result<(), ValidationError> {
    ValidationError::check_positive("id", self.id)?;
    ValidationError::check_non_empty("by", self.by.as_deref())
  }
}
