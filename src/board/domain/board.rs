//! The board ordering engine.
//!
//! A board is an ordered sequence of columns, each holding an ordered
//! sequence of task references. Every task on the board sits in exactly one
//! column; the task records themselves are owned by the board. Operations
//! that fail leave the board untouched.

use super::{BoardConfig, BoardError, Column, ColumnId, ColumnTitle, Task, TaskId, TaskPatch};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Whether the caller has confirmed a destructive column deletion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteConfirmation {
    /// The user has not been asked yet.
    #[default]
    Unconfirmed,
    /// The user accepted losing the column's tasks.
    Confirmed,
}

/// Result of [`Board::delete_column`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnDeletion {
    /// The column and its tasks were removed.
    Deleted {
        /// The removed column.
        column: Column,
        /// Task records that were held by the column, in column order.
        removed_tasks: Vec<Task>,
    },
    /// The column holds tasks and the caller must confirm first. Nothing
    /// was changed.
    ConfirmationRequired {
        /// The column that was not deleted.
        column_id: ColumnId,
        /// Number of tasks that a confirmed deletion would remove.
        affected_tasks: usize,
    },
}

/// Columns of tasks in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    columns: Vec<Column>,
    tasks: HashMap<TaskId, Task>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            columns: Vec::new(),
            tasks: HashMap::new(),
        }
    }

    /// Creates a board holding one empty column per configured default
    /// title.
    ///
    /// # Errors
    ///
    /// Returns the title error of the first rejected default column.
    pub fn seeded(config: BoardConfig) -> Result<Self, BoardError> {
        let titles = config.default_columns.clone();
        let mut board = Self::new(config);
        for title in &titles {
            board.add_column(title)?;
        }
        Ok(board)
    }

    /// Returns the board configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns a column by identifier.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == id)
    }

    /// Returns a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Returns the tasks of a column in display order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownColumn`] when the column does not exist.
    pub fn tasks_in(&self, id: ColumnId) -> Result<Vec<&Task>, BoardError> {
        let column = self.column(id).ok_or(BoardError::UnknownColumn(id))?;
        Ok(column
            .tasks()
            .iter()
            .filter_map(|task| self.tasks.get(task))
            .collect())
    }

    /// Returns the column holding a task. The column title is the task's
    /// status.
    #[must_use]
    pub fn status_of(&self, task: TaskId) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.position_of(task).is_some())
    }

    /// Returns the number of tasks across all columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Returns `true` when every task record sits in exactly one column and
    /// every column reference resolves to a record.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.task_count() == self.tasks.len()
            && self.tasks.keys().all(|id| {
                self.columns
                    .iter()
                    .map(|column| column.tasks().iter().filter(|task| *task == id).count())
                    .sum::<usize>()
                    == 1
            })
    }

    /// Appends an empty column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::BlankColumnTitle`] or
    /// [`BoardError::TitleTooLong`] when the title is rejected.
    pub fn add_column(&mut self, title: &str) -> Result<ColumnId, BoardError> {
        let column = Column::new(ColumnTitle::new(title, self.config.max_title_length)?);
        let id = column.id();
        self.columns.push(column);
        Ok(id)
    }

    /// Replaces a column's title in place.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownColumn`] when the column does not exist,
    /// or a title error when the title is rejected.
    pub fn rename_column(&mut self, id: ColumnId, title: &str) -> Result<(), BoardError> {
        let validated = ColumnTitle::new(title, self.config.max_title_length)?;
        self.column_mut(id)?.rename(validated);
        Ok(())
    }

    /// Deletes a column together with its tasks.
    ///
    /// A column that still holds tasks is only removed once the caller
    /// passes [`DeleteConfirmation::Confirmed`]; otherwise the affected task
    /// count is returned and nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownColumn`] when the column does not exist.
    pub fn delete_column(
        &mut self,
        id: ColumnId,
        confirmation: DeleteConfirmation,
    ) -> Result<ColumnDeletion, BoardError> {
        let index = self.column_index(id)?;
        let affected_tasks = self.columns.get(index).map_or(0, Column::len);
        if affected_tasks > 0 && confirmation == DeleteConfirmation::Unconfirmed {
            return Ok(ColumnDeletion::ConfirmationRequired {
                column_id: id,
                affected_tasks,
            });
        }
        let column = self.columns.remove(index);
        let removed_tasks = column
            .tasks()
            .iter()
            .filter_map(|task| self.tasks.remove(task))
            .collect();
        Ok(ColumnDeletion::Deleted {
            column,
            removed_tasks,
        })
    }

    /// Moves the column at `from` so that it ends up at `to`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoDestination`] when `to` is `None` and
    /// [`BoardError::IndexOutOfRange`] when either position is past the end.
    pub fn reorder_columns(&mut self, from: usize, to: Option<usize>) -> Result<(), BoardError> {
        move_element(&mut self.columns, from, to)
    }

    /// Appends a task to a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownColumn`] when the column does not exist
    /// and [`BoardError::DuplicateTask`] when the task is already on the
    /// board.
    pub fn add_task(&mut self, column: ColumnId, task: Task) -> Result<TaskId, BoardError> {
        let id = task.id();
        if self.tasks.contains_key(&id) {
            return Err(BoardError::DuplicateTask(id));
        }
        self.column_mut(column)?.push(id);
        self.tasks.insert(id, task);
        Ok(id)
    }

    /// Moves a task into `to_column` at `to_index`, removing it from its
    /// current column. The index is clamped to the destination length.
    ///
    /// Returns the position the task ended up at.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownTask`] or [`BoardError::UnknownColumn`]
    /// when either does not exist.
    pub fn move_task(
        &mut self,
        task: TaskId,
        to_column: ColumnId,
        to_index: usize,
    ) -> Result<usize, BoardError> {
        let destination = self.column_index(to_column)?;
        let (source, position) = self.locate(task).ok_or(BoardError::UnknownTask(task))?;
        self.columns
            .get_mut(source)
            .and_then(|column| column.remove_at(position))
            .ok_or(BoardError::UnknownTask(task))?;
        let column = self
            .columns
            .get_mut(destination)
            .ok_or(BoardError::UnknownColumn(to_column))?;
        Ok(column.insert_clamped(to_index, task))
    }

    /// Moves the task at `from` within a column so that it ends up at `to`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownColumn`] when the column does not exist,
    /// [`BoardError::NoDestination`] when `to` is `None` and
    /// [`BoardError::IndexOutOfRange`] when either position is past the end.
    pub fn reorder_task(
        &mut self,
        column: ColumnId,
        from: usize,
        to: Option<usize>,
    ) -> Result<(), BoardError> {
        move_element(self.column_mut(column)?.tasks_mut(), from, to)
    }

    /// Removes a task from the board and returns its record.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownTask`] when the task is not on the board.
    pub fn remove_task(&mut self, task: TaskId) -> Result<Task, BoardError> {
        let (column, position) = self.locate(task).ok_or(BoardError::UnknownTask(task))?;
        let record = self.tasks.remove(&task).ok_or(BoardError::UnknownTask(task))?;
        if let Some(owner) = self.columns.get_mut(column) {
            owner.remove_at(position);
        }
        Ok(record)
    }

    /// Merges a partial update into a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownTask`] when the task is not on the board,
    /// or a title error when the new title is rejected.
    pub fn update_task(
        &mut self,
        task: TaskId,
        patch: TaskPatch,
        clock: &impl Clock,
    ) -> Result<&Task, BoardError> {
        let max_title_length = self.config.max_title_length;
        let record = self
            .tasks
            .get_mut(&task)
            .ok_or(BoardError::UnknownTask(task))?;
        record.apply(patch, max_title_length, clock)?;
        Ok(record)
    }

    fn column_index(&self, id: ColumnId) -> Result<usize, BoardError> {
        self.columns
            .iter()
            .position(|column| column.id() == id)
            .ok_or(BoardError::UnknownColumn(id))
    }

    fn column_mut(&mut self, id: ColumnId) -> Result<&mut Column, BoardError> {
        self.columns
            .iter_mut()
            .find(|column| column.id() == id)
            .ok_or(BoardError::UnknownColumn(id))
    }

    /// Returns the column index and position of a task.
    fn locate(&self, task: TaskId) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(index, column)| column.position_of(task).map(|position| (index, position)))
    }
}

/// Removes the element at `from` and reinserts it at `to` in the remaining
/// sequence.
fn move_element<T>(items: &mut Vec<T>, from: usize, to: Option<usize>) -> Result<(), BoardError> {
    let destination = to.ok_or(BoardError::NoDestination)?;
    let len = items.len();
    if let Some(index) = [from, destination].into_iter().find(|index| *index >= len) {
        return Err(BoardError::IndexOutOfRange { index, len });
    }
    if from != destination {
        let item = items.remove(from);
        items.insert(destination, item);
    }
    Ok(())
}
