//! Insertion-ordered tag sets.

use serde::{Deserialize, Serialize};

/// Set of tags that keeps insertion order.
///
/// Boards reuse it for the people responsible for a task.
///
/// Added tags are trimmed and blank tags are ignored. Lookups and removal
/// match the exact stored string. Adding a tag that is already present and
/// removing one that is absent are both no-ops.
///
/// # Examples
///
/// ```
/// use crmboard::crm::domain::TagSet;
///
/// let mut tags = TagSet::new();
/// assert!(tags.add("vip"));
/// assert!(!tags.add("vip"));
/// tags.add("follow-up");
/// tags.remove("vip");
/// assert_eq!(tags.as_slice(), ["follow-up"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Creates an empty tag set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a tag, returning `true` when it was not already present.
    pub fn add(&mut self, tag: &str) -> bool {
        let trimmed = tag.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.0.push(trimmed.to_owned());
        true
    }

    /// Removes the tag equal to `tag`, returning `true` when it was present.
    ///
    /// The remaining tags keep their relative order.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != tag);
        self.0.len() != before
    }

    /// Returns `true` when a tag equal to `tag` is present.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|existing| existing == tag)
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when there are no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the tags in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterates over the tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Self::new();
        for tag in iter {
            tags.add(tag.as_ref());
        }
        tags
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(tags: TagSet) -> Self {
        tags.0
    }
}
