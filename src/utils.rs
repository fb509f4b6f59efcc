use super::*;

const TIMESTAMP_EXPECTATION: &str = "epoch seconds or a timestamp string";

const NAIVE_TIMESTAMP_FORMATS: [&str; 2] =
  ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub(crate) fn deserialize_optional_string<'de, D>(
  deserializer: D,
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) => Ok(Some(s)),
    Some(Value::Number(n)) => Ok(Some(n.to_string())),
    Some(Value::Bool(b)) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"string or number",
    )),
    Some(Value::Array(_)) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"string or number",
    )),
    Some(Value::Object(_)) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"string or number",
    )),
  }
}

/// Integer values are epoch seconds. Strings are RFC 3339, or naive
/// date-times which are taken to be UTC.
pub(crate) fn deserialize_timestamp<'de, D>(
  deserializer: D,
) -> Result<DateTime<Utc>, D::Error>
where
  D: Deserializer<'de>,
{
  match Value::deserialize(deserializer)? {
    Value::Number(n) => n
      .as_i64()
      .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
      .ok_or_else(|| {
        de::Error::invalid_value(
          Unexpected::Other("non-integer or out of range number"),
          &TIMESTAMP_EXPECTATION,
        )
      }),
    Value::String(s) => parse_timestamp(&s).ok_or_else(|| {
      de::Error::invalid_value(Unexpected::Str(&s), &TIMESTAMP_EXPECTATION)
    }),
    Value::Null => Err(de::Error::invalid_type(
      Unexpected::Unit,
      &TIMESTAMP_EXPECTATION,
    )),
    Value::Bool(b) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &TIMESTAMP_EXPECTATION,
    )),
    Value::Array(_) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &TIMESTAMP_EXPECTATION,
    )),
    Value::Object(_) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &TIMESTAMP_EXPECTATION,
    )),
  }
}

/// The remote API signals a missing record with an empty body rather than
/// a status code.
pub(crate) fn is_absent(value: &Value) -> bool {
  match value {
    Value::Null => true,
    Value::Array(values) => values.is_empty(),
    Value::Object(fields) => fields.is_empty(),
    Value::String(s) => s.is_empty(),
    Value::Bool(_) | Value::Number(_) => false,
  }
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
  if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
    return Some(timestamp.with_timezone(&Utc));
  }

  NAIVE_TIMESTAMP_FORMATS
    .iter()
    .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    .map(|timestamp| timestamp.and_utc())
}
