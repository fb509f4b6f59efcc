use super::*;

#[derive(Clone, Debug)]
pub(crate) enum Item {
  Comment(Comment),
  Job(Job),
  Poll(Poll),
  PollOption(PollOption),
  Story(Story),
}

impl Item {
  /// Decodes a remote payload into the variant named by its `type` field.
  ///
  /// Empty payloads and unrecognized discriminators resolve to `None`. A
  /// payload that names a known variant but breaks one of its invariants is
  /// an error.
  pub(crate) fn from_value(value: Value) -> Result<Option<Self>, ValidationError> {
    if is_absent(&value) {
      return Ok(None);
    }

    let discriminator = value.get("type").and_then(Value::as_str);

    let Some(kind) = discriminator.and_then(ItemKind::from_discriminator) else {
      warn!(
        id = ?value.get("id"),
        kind = ?discriminator,
        "skipping item with unknown type"
      );
      return Ok(None);
    };

    let item = match kind {
      ItemKind::Comment => Self::Comment(serde_json::from_value(value)?),
      ItemKind::Job => Self::Job(serde_json::from_value(value)?),
      ItemKind::Poll => Self::Poll(serde_json::from_value(value)?),
      ItemKind::PollOption => Self::PollOption(serde_json::from_value(value)?),
      ItemKind::Story => Self::Story(serde_json::from_value(value)?),
    };

    item.validate()?;

    Ok(Some(item))
  }

  #[cfg(test)]
  pub(crate) fn header(&self) -> &Header {
    match self {
      Self::Comment(comment) => &comment.header,
      Self::Job(job) => &job.header,
      Self::Poll(poll) => &poll.header,
      Self::PollOption(option) => &option.header,
      Self::Story(story) => &story.header,
    }
  }

  #[cfg(test)]
  pub(crate) fn id(&self) -> u64 {
    self.header().id
  }

  pub(crate) fn kind(&self) -> ItemKind {
    match self {
      Self::Comment(_) => ItemKind::Comment,
      Self::Job(_) => ItemKind::Job,
      Self::Poll(_) => ItemKind::Poll,
      Self::PollOption(_) => ItemKind::PollOption,
      Self::Story(_) => ItemKind::Story,
    }
  }

  fn validate(&self) -> Result<(), ValidationError> {
    match self {
      Self::Comment(comment) => comment.validate(),
      Self::Job(job) => job.validate(),
      Self::Poll(poll) => poll.validate(),
      Self::PollOption(option) => option.validate(),
      Self::Story(story) => story.validate(),
    }
  }
}
