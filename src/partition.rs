use super::*;

const PLURALS: [(&str, &str); 6] = [
  ("comment", "comments"),
  ("job", "jobs"),
  ("poll", "polls"),
  ("pollopt", "pollopts"),
  ("story", "stories"),
  ("user", "users"),
];

/// Hive-style partition directory for one type on one UTC day.
///
/// Pure string formatting; the filesystem is never consulted. With a bucket
/// the result is an `s3://` URL rooted at that bucket.
pub(crate) fn partition_path(
  base: &str,
  name: &str,
  timestamp: DateTime<Utc>,
  bucket: Option<&str>,
) -> String {
  let base = match base.trim_end_matches('/') {
    "" if base.starts_with('/') => "/",
    trimmed => trimmed,
  };

  let separator = if base.is_empty() || base.ends_with('/') {
    ""
  } else {
    "/"
  };

  let path = format!(
    "{base}{separator}type={name}/year={}/month={:02}/day={:02}",
    timestamp.year(),
    timestamp.month(),
    timestamp.day(),
  );

  match bucket {
    Some(bucket) => format!("s3://{bucket}/{}", path.trim_start_matches('/')),
    None => path,
  }
}

pub(crate) fn plural(name: &str) -> Cow<'static, str> {
  match PLURALS.iter().find(|(singular, _)| *singular == name) {
    Some((_, plural)) => Cow::Borrowed(*plural),
    None => Cow::Owned(format!("{name}s")),
  }
}
