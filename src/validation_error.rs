use super::*;

#[derive(Debug, Error)]
pub(crate) enum ValidationError {
  #[error("`{field}` must not be empty")]
  Empty { field: &'static str },
  #[error("malformed payload: {0}")]
  Malformed(#[from] serde_json::Error),
  #[error("{kind} {id} is not deleted but has no `{field}`")]
  MissingContent {
    field: &'static str,
    id: u64,
    kind: ItemKind,
  },
  #[error("`{field}` must be positive")]
  NotPositive { field: &'static str },
}

impl ValidationError {
  pub(crate) fn check_non_empty(
    field: &'static str,
    value: Option<&str>,
  ) -> Result<(), Self> {
    match value {
      Some("") => Err(Self::Empty { field }),
      _ => Ok(()),
    }
  }

  pub(crate) fn check_positive(
    field: &'static str,
    value: u64,
  ) -> Result<(), Self> {
    if value == 0 {
      Err(Self::NotPositive { field })
    } else {
      Ok(())
    }
  }
}
