use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct User {
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) about: Option<String>,
  #[serde(deserialize_with = "deserialize_timestamp")]
  pub(crate) created: DateTime<Utc>,
  pub(crate) id: String,
  pub(crate) karma: u64,
  #[serde(default)]
  pub(crate) submitted: Vec<u64>,
}

impl User {
  pub(crate) fn from_value(value: Value) -> Result<Option<Self>, ValidationError> {
    if is_absent(&value) {
      return Ok(None);
    }

    let user = serde_json::from_value::<Self>(value)?;

    ValidationError::check_non_empty("id", Some(&user.id))?;
    ValidationError::check_non_empty("about", user.about.as_deref())?;

    Ok(Some(user))
  }

  pub(crate) fn schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
      Field::new("id", DataType::Utf8, false),
      timestamp_field("created"),
      Field::new("karma", DataType::UInt64, false),
      Field::new("about", DataType::Utf8, true),
      id_list_field("submitted"),
      timestamp_field("timestamp"),
    ]))
  }

  /// Every row gets the same `timestamp`: the moment this run resolved the
  /// profiles, as opposed to each account's own `created` time.
  pub(crate) fn to_record_batch(
    users: &[Self],
    fetched_at: DateTime<Utc>,
  ) -> Result<RecordBatch, ArrowError> {
    RecordBatch::try_new(
      Self::schema(),
      vec![
        Arc::new(StringArray::from_iter_values(
          users.iter().map(|user| user.id.as_str()),
        )),
        timestamps(users.iter().map(|user| user.created)),
        counts(users.iter().map(|user| user.karma)),
        optional_strings(users.iter().map(|user| user.about.as_deref())),
        id_lists(users.iter().map(|user| user.submitted.as_slice())),
        timestamps(users.iter().map(|_| fetched_at)),
      ],
    )
  }
}
