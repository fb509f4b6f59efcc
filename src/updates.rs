use super::*;

/// Item ids and usernames changed since the remote source's last update.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub(crate) struct Updates {
  pub(crate) items: Vec<u64>,
  pub(crate) profiles: Vec<String>,
}

impl Updates {
  pub(crate) fn from_value(value: Value) -> Result<Self, ValidationError> {
    if is_absent(&value) {
      return Ok(Self::default());
    }

    Ok(serde_json::from_value(value)?)
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty() && self.profiles.is_empty()
  }

  pub(crate) fn schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
      id_list_field("items"),
      Field::new(
        "profiles",
        DataType::List(Arc::new(Field::new("item", DataType::Utf8, true))),
        false,
      ),
      timestamp_field("timestamp"),
    ]))
  }

  /// A single-row frame recording the envelope and when it was polled.
  pub(crate) fn to_record_batch(
    &self,
    fetched_at: DateTime<Utc>,
  ) -> Result<RecordBatch, ArrowError> {
    let mut profiles = ListBuilder::new(StringBuilder::new());

    for profile in &self.profiles {
      profiles.values().append_value(profile);
    }

    profiles.append(true);

    RecordBatch::try_new(
      Self::schema(),
      vec![
        id_lists(iter::once(self.items.as_slice())),
        Arc::new(profiles.finish()),
        timestamps(iter::once(fetched_at)),
      ],
    )
  }
}
