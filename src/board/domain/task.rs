//! Tasks placed on the board.

use super::{BoardError, TaskId, column::check_length};
use crate::crm::domain::{ParseVariantError, TagSet};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Urgency of a task.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal urgency.
    #[default]
    Medium,
    /// Should be picked up soon.
    High,
    /// Needs attention now.
    Urgent,
}

impl TaskPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseVariantError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParseVariantError::new("task priority", value)),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter object for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Names of the people responsible, without duplicates.
    pub responsible: TagSet,
    /// Due date and time, if any.
    pub due: Option<DateTime<Utc>>,
    /// Labels.
    pub tags: TagSet,
    /// Urgency.
    pub priority: TaskPriority,
    /// Subtasks, attachments, comments and time entries, carried untouched.
    pub details: Map<String, Value>,
    /// Name of the user who created the task.
    pub created_by: String,
}

impl NewTask {
    /// Creates a request with a title and creator; other fields are empty
    /// and the priority is [`TaskPriority::Medium`].
    #[must_use]
    pub fn new(title: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            responsible: TagSet::new(),
            due: None,
            tags: TagSet::new(),
            priority: TaskPriority::default(),
            details: Map::new(),
            created_by: created_by.into(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the responsible people.
    #[must_use]
    pub fn with_responsible<S: AsRef<str>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.responsible = names.into_iter().collect();
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due(mut self, due: DateTime<Utc>) -> Self {
        self.due = Some(due);
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags<S: AsRef<str>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the opaque nested details.
    #[must_use]
    pub fn with_details(mut self, details: Map<String, Value>) -> Self {
        self.details = details;
        self
    }
}

/// Partial update for a task; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Replacement set of responsible people.
    pub responsible: Option<TagSet>,
    /// New due date; `Some(None)` clears it.
    pub due: Option<Option<DateTime<Utc>>>,
    /// Replacement tags.
    pub tags: Option<TagSet>,
    /// New priority.
    pub priority: Option<TaskPriority>,
    /// Replacement nested details.
    pub details: Option<Map<String, Value>>,
}

/// A task card. Its status is the column holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    responsible: TagSet,
    due: Option<DateTime<Utc>>,
    tags: TagSet,
    priority: TaskPriority,
    details: Map<String, Value>,
    created_by: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task with a fresh identifier and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::BlankTaskTitle`] or [`BoardError::TitleTooLong`]
    /// when the title is rejected.
    pub fn new(
        data: NewTask,
        max_title_length: usize,
        clock: &impl Clock,
    ) -> Result<Self, BoardError> {
        let title = task_title(&data.title, max_title_length)?;
        let now = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            title,
            description: data.description,
            responsible: data.responsible,
            due: data.due,
            tags: data.tags,
            priority: data.priority,
            details: data.details,
            created_by: data.created_by.trim().to_owned(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the responsible people in assignment order.
    #[must_use]
    pub const fn responsible(&self) -> &TagSet {
        &self.responsible
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due(&self) -> Option<DateTime<Utc>> {
        self.due
    }

    /// Returns the tags.
    #[must_use]
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the opaque nested details.
    #[must_use]
    pub const fn details(&self) -> &Map<String, Value> {
        &self.details
    }

    /// Returns the creator's name.
    #[must_use]
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Merges a partial update and refreshes the update timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::BlankTaskTitle`] or [`BoardError::TitleTooLong`]
    /// when the new title is rejected; the task is then left unchanged.
    pub fn apply(
        &mut self,
        patch: TaskPatch,
        max_title_length: usize,
        clock: &impl Clock,
    ) -> Result<(), BoardError> {
        let title = patch
            .title
            .as_deref()
            .map(|value| task_title(value, max_title_length))
            .transpose()?;
        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(responsible) = patch.responsible {
            self.responsible = responsible;
        }
        if let Some(due) = patch.due {
            self.due = due;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(details) = patch.details {
            self.details = details;
        }
        self.updated_at = clock.utc();
        Ok(())
    }
}

fn task_title(value: &str, max_length: usize) -> Result<String, BoardError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BoardError::BlankTaskTitle);
    }
    check_length(trimmed, max_length)?;
    Ok(trimmed.to_owned())
}
