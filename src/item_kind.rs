use super::*;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) enum ItemKind {
  Comment,
  Job,
  Poll,
  PollOption,
  Story,
}

impl Display for ItemKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl ItemKind {
  pub(crate) const ALL: [ItemKind; 5] = [
    ItemKind::Story,
    ItemKind::Comment,
    ItemKind::Job,
    ItemKind::Poll,
    ItemKind::PollOption,
  ];

  pub(crate) fn as_str(self) -> &'static str {
    match self {
      Self::Comment => "comment",
      Self::Job => "job",
      Self::Poll => "poll",
      Self::PollOption => "pollopt",
      Self::Story => "story",
    }
  }

  pub(crate) fn from_discriminator(discriminator: &str) -> Option<Self> {
    Self::ALL
      .into_iter()
      .find(|kind| kind.as_str() == discriminator)
  }
}
