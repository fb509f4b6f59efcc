use super::*;

/// Items partitioned by variant, each bucket keeping input order.
#[derive(Debug, Default)]
pub(crate) struct ItemGroups {
  comments: Vec<Comment>,
  jobs: Vec<Job>,
  poll_options: Vec<PollOption>,
  polls: Vec<Poll>,
  stories: Vec<Story>,
}

impl From<Vec<Item>> for ItemGroups {
  fn from(items: Vec<Item>) -> Self {
    let mut groups = Self::default();

    for item in items {
      match item {
        Item::Comment(comment) => groups.comments.push(comment),
        Item::Job(job) => groups.jobs.push(job),
        Item::Poll(poll) => groups.polls.push(poll),
        Item::PollOption(option) => groups.poll_options.push(option),
        Item::Story(story) => groups.stories.push(story),
      }
    }

    groups
  }
}

impl ItemGroups {
  fn batch<T: Columnar>(rows: &[T]) -> Result<Option<RecordBatch>, ArrowError> {
    if rows.is_empty() {
      return Ok(None);
    }

    T::to_record_batch(rows).map(Some)
  }

  #[cfg(test)]
  pub(crate) fn len(&self, kind: ItemKind) -> usize {
    match kind {
      ItemKind::Comment => self.comments.len(),
      ItemKind::Job => self.jobs.len(),
      ItemKind::Poll => self.polls.len(),
      ItemKind::PollOption => self.poll_options.len(),
      ItemKind::Story => self.stories.len(),
    }
  }

  /// One record batch per non-empty group.
  pub(crate) fn record_batches(
    &self,
  ) -> Result<Vec<(ItemKind, RecordBatch)>, ArrowError> {
    let mut batches = Vec::new();

    for kind in ItemKind::ALL {
      let batch = match kind {
        ItemKind::Comment => Self::batch(&self.comments)?,
        ItemKind::Job => Self::batch(&self.jobs)?,
        ItemKind::Poll => Self::batch(&self.polls)?,
        ItemKind::PollOption => Self::batch(&self.poll_options)?,
        ItemKind::Story => Self::batch(&self.stories)?,
      };

      if let Some(batch) = batch {
        batches.push((kind, batch));
      }
    }

    Ok(batches)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    arrow::array::{Array, UInt64Array},
    serde_json::json,
  };

  fn item(value: Value) -> Item {
    Item::from_value(value).unwrap().unwrap()
  }

  fn sample() -> Vec<Item> {
    vec![
      item(json!({"id": 1, "time": 1, "title": "a", "type": "story"})),
      item(json!({"id": 2, "parent": 1, "text": "b", "time": 2, "type": "comment"})),
      item(json!({"id": 3, "time": 3, "title": "c", "type": "story", "url": "https://c.example"})),
      item(json!({"id": 4, "parts": [5], "time": 4, "title": "d", "type": "poll"})),
      item(json!({"id": 5, "poll": 4, "text": "e", "time": 5, "type": "pollopt"})),
    ]
  }

  #[test]
  fn from_partitions_items_by_kind() {
    let groups = ItemGroups::from(sample());

    assert_eq!(groups.len(ItemKind::Story), 2);
    assert_eq!(groups.len(ItemKind::Comment), 1);
    assert_eq!(groups.len(ItemKind::Job), 0);
    assert_eq!(groups.len(ItemKind::Poll), 1);
    assert_eq!(groups.len(ItemKind::PollOption), 1);
  }

  #[test]
  fn record_batches_skip_empty_groups() {
    let batches = ItemGroups::from(sample()).record_batches().unwrap();

    let kinds = batches.iter().map(|(kind, _)| *kind).collect::<Vec<_>>();

    assert_eq!(
      kinds,
      vec![
        ItemKind::Story,
        ItemKind::Comment,
        ItemKind::Poll,
        ItemKind::PollOption
      ]
    );
  }

  #[test]
  fn record_batches_use_fixed_schemas() {
    let batches = ItemGroups::from(sample()).record_batches().unwrap();

    let (_, stories) = &batches[0];

    assert_eq!(stories.schema(), Story::schema());
    assert_eq!(stories.num_rows(), 2);

    let ids = stories
      .column_by_name("id")
      .unwrap()
      .as_any()
      .downcast_ref::<UInt64Array>()
      .unwrap();
    assert_eq!(ids.values().to_vec(), vec![1, 3]);

    let urls = stories.column_by_name("url").unwrap();
    assert!(urls.is_null(0));
    assert!(!urls.is_null(1));

    let descendants = stories.column_by_name("descendants").unwrap();
    assert_eq!(descendants.null_count(), 2);
  }

  #[test]
  fn every_kind_has_a_distinct_schema() {
    let schemas = [
      Comment::schema(),
      Job::schema(),
      Poll::schema(),
      PollOption::schema(),
      Story::schema(),
    ];

    for (i, left) in schemas.iter().enumerate() {
      for right in &schemas[i + 1..] {
        assert_ne!(left, right);
      }
    }
  }
}
