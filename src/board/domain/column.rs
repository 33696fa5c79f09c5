//! Board columns.

use super::{BoardError, ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated column title, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnTitle(String);

impl ColumnTitle {
    /// Creates a column title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::BlankColumnTitle`] when the trimmed value is
    /// empty, or [`BoardError::TitleTooLong`] when it exceeds `max_length`
    /// characters.
    pub fn new(value: &str, max_length: usize) -> Result<Self, BoardError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(BoardError::BlankColumnTitle);
        }
        check_length(trimmed, max_length)?;
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ColumnTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ColumnTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejects titles longer than `max_length` characters.
pub(super) fn check_length(title: &str, max_length: usize) -> Result<(), BoardError> {
    if title.chars().count() > max_length {
        return Err(BoardError::TitleTooLong { max: max_length });
    }
    Ok(())
}

/// A board column holding an ordered sequence of task references.
///
/// The column's title doubles as the status of every task it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    title: ColumnTitle,
    tasks: Vec<TaskId>,
}

impl Column {
    pub(super) fn new(title: ColumnTitle) -> Self {
        Self {
            id: ColumnId::new(),
            title,
            tasks: Vec::new(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the column title.
    #[must_use]
    pub const fn title(&self) -> &ColumnTitle {
        &self.title
    }

    /// Returns the task references in display order.
    #[must_use]
    pub fn tasks(&self) -> &[TaskId] {
        &self.tasks
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the position of a task within the column.
    #[must_use]
    pub fn position_of(&self, task: TaskId) -> Option<usize> {
        self.tasks.iter().position(|id| *id == task)
    }

    pub(super) fn rename(&mut self, title: ColumnTitle) {
        self.title = title;
    }

    pub(super) fn insert_clamped(&mut self, index: usize, task: TaskId) -> usize {
        let position = index.min(self.tasks.len());
        self.tasks.insert(position, task);
        position
    }

    pub(super) fn push(&mut self, task: TaskId) {
        self.tasks.push(task);
    }

    pub(super) fn remove_at(&mut self, index: usize) -> Option<TaskId> {
        (index < self.tasks.len()).then(|| self.tasks.remove(index))
    }

    pub(super) const fn tasks_mut(&mut self) -> &mut Vec<TaskId> {
        &mut self.tasks
    }
}
