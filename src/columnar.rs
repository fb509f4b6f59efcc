use super::*;

/// A record type with a fixed Arrow schema.
///
/// The schema never depends on which optional fields a batch happens to
/// populate, so every file written for a type can be read with the same
/// schema across runs.
pub(crate) trait Columnar: Sized {
  fn columns(rows: &[Self]) -> Vec<ArrayRef>;

  fn schema() -> SchemaRef;

  fn to_record_batch(rows: &[Self]) -> Result<RecordBatch, ArrowError> {
    RecordBatch::try_new(Self::schema(), Self::columns(rows))
  }
}

pub(crate) fn base_columns<'a>(
  kind: ItemKind,
  headers: impl Iterator<Item = &'a Header> + Clone,
) -> Vec<ArrayRef> {
  vec![
    Arc::new(UInt64Array::from_iter_values(
      headers.clone().map(|header| header.id),
    )),
    Arc::new(StringArray::from_iter_values(
      headers.clone().map(|_| kind.as_str()),
    )),
    optional_strings(headers.clone().map(|header| header.by.as_deref())),
    timestamps(headers.clone().map(|header| header.time)),
    Arc::new(BooleanArray::from(
      headers.clone().map(|header| header.dead).collect::<Vec<_>>(),
    )),
    Arc::new(BooleanArray::from(
      headers.clone().map(|header| header.deleted).collect::<Vec<_>>(),
    )),
    id_lists(headers.map(|header| header.kids.as_slice())),
  ]
}

pub(crate) fn base_fields() -> Vec<Field> {
  vec![
    Field::new("id", DataType::UInt64, false),
    Field::new("type", DataType::Utf8, false),
    Field::new("by", DataType::Utf8, true),
    timestamp_field("time"),
    Field::new("dead", DataType::Boolean, false),
    Field::new("deleted", DataType::Boolean, false),
    id_list_field("kids"),
  ]
}

pub(crate) fn counts(values: impl Iterator<Item = u64>) -> ArrayRef {
  Arc::new(UInt64Array::from_iter_values(values))
}

pub(crate) fn id_list_field(name: &str) -> Field {
  Field::new(
    name,
    DataType::List(Arc::new(Field::new("item", DataType::UInt64, true))),
    false,
  )
}

pub(crate) fn id_lists<'a>(lists: impl Iterator<Item = &'a [u64]>) -> ArrayRef {
  let mut builder = ListBuilder::new(UInt64Builder::new());

  for ids in lists {
    builder.values().append_slice(ids);
    builder.append(true);
  }

  Arc::new(builder.finish())
}

pub(crate) fn optional_counts(
  values: impl Iterator<Item = Option<u64>>,
) -> ArrayRef {
  Arc::new(values.collect::<UInt64Array>())
}

pub(crate) fn optional_strings<'a>(
  values: impl Iterator<Item = Option<&'a str>>,
) -> ArrayRef {
  Arc::new(values.collect::<StringArray>())
}

pub(crate) fn timestamp_field(name: &str) -> Field {
  Field::new(
    name,
    DataType::Timestamp(TimeUnit::Second, Some("UTC".into())),
    false,
  )
}

pub(crate) fn timestamps(
  values: impl Iterator<Item = DateTime<Utc>>,
) -> ArrayRef {
  Arc::new(
    TimestampSecondArray::from_iter_values(
      values.map(|timestamp| timestamp.timestamp()),
    )
    .with_timezone("UTC"),
  )
}

#[cfg(test)]
mod tests {
  use {super::*, arrow::array::Array, chrono::TimeZone};

  fn header(id: u64, by: Option<&str>, kids: Vec<u64>) -> Header {
    Header {
      by: by.map(str::to_owned),
      dead: false,
      deleted: id % 2 == 0,
      id,
      kids,
      time: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
    }
  }

  #[test]
  fn base_columns_line_up_with_base_fields() {
    let headers = [header(1, Some("pg"), vec![2, 3]), header(2, None, vec![])];

    let schema = Arc::new(Schema::new(base_fields()));

    let batch = RecordBatch::try_new(
      schema,
      base_columns(ItemKind::Comment, headers.iter()),
    )
    .unwrap();

    assert_eq!(batch.num_rows(), 2);
    assert_eq!(batch.num_columns(), 7);

    let by = batch.column_by_name("by").unwrap();
    assert!(!by.is_null(0));
    assert!(by.is_null(1));

    let kinds = batch
      .column_by_name("type")
      .unwrap()
      .as_any()
      .downcast_ref::<StringArray>()
      .unwrap();
    assert_eq!(kinds.value(0), "comment");
    assert_eq!(kinds.value(1), "comment");
  }

  #[test]
  fn timestamps_are_utc_seconds() {
    let column = timestamps(
      [Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()].into_iter(),
    );

    assert_eq!(
      column.data_type(),
      &DataType::Timestamp(TimeUnit::Second, Some("UTC".into()))
    );

    let column = column
      .as_any()
      .downcast_ref::<TimestampSecondArray>()
      .unwrap();

    assert_eq!(column.value(0), 1_705_314_600);
  }

  #[test]
  fn id_lists_keep_empty_lists_distinct_from_nulls() {
    let column = id_lists([&[1_u64, 2][..], &[][..]].into_iter());

    assert_eq!(column.len(), 2);
    assert_eq!(column.null_count(), 0);
  }
}
