use super::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Stage {
  Done,
  FetchUpdates,
  Persist,
  ResolveItems,
  ResolveUsers,
}

impl Display for Stage {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Done => "done",
      Self::FetchUpdates => "fetch-updates",
      Self::Persist => "persist",
      Self::ResolveItems => "resolve-items",
      Self::ResolveUsers => "resolve-users",
    })
  }
}

impl Stage {
  pub(crate) fn next(self) -> Self {
    match self {
      Self::FetchUpdates => Self::ResolveItems,
      Self::ResolveItems => Self::ResolveUsers,
      Self::ResolveUsers => Self::Persist,
      Self::Persist | Self::Done => Self::Done,
    }
  }
}
