//! Session-scoped board state.

use crate::board::domain::{
    Board, BoardConfig, BoardError, ColumnDeletion, ColumnId, DeleteConfirmation, NewTask, Task,
    TaskId, TaskPatch,
};
use mockable::Clock;
use std::sync::Arc;

/// Board state that lives for one user session.
///
/// The session is the only way to mutate its board. Rejected operations are
/// logged at debug level and returned to the caller, who may ignore them.
/// Nothing is persisted; dropping the session discards the board.
#[derive(Debug)]
pub struct BoardSession<C>
where
    C: Clock + Send + Sync,
{
    board: Board,
    clock: Arc<C>,
}

impl<C> BoardSession<C>
where
    C: Clock + Send + Sync,
{
    /// Starts a session with an empty board.
    #[must_use]
    pub fn new(config: BoardConfig, clock: Arc<C>) -> Self {
        Self {
            board: Board::new(config),
            clock,
        }
    }

    /// Starts a session seeded with the default `To Do`, `In Progress` and
    /// `Done` columns.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::start`].
    pub fn with_default_columns(clock: Arc<C>) -> Result<Self, BoardError> {
        Self::start(BoardConfig::default(), clock)
    }

    /// Starts a session seeded with the configured default columns.
    ///
    /// # Errors
    ///
    /// Returns the title error of the first rejected default column.
    pub fn start(config: BoardConfig, clock: Arc<C>) -> Result<Self, BoardError> {
        let board = Board::seeded(config)?;
        tracing::debug!(columns = board.columns().len(), "board session started");
        Ok(Self { board, clock })
    }

    /// Returns a read-only view of the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Ends the session and returns the final board.
    #[must_use]
    pub fn finish(self) -> Board {
        tracing::debug!(tasks = self.board.task_count(), "board session finished");
        self.board
    }

    /// Appends an empty column.
    ///
    /// # Errors
    ///
    /// See [`Board::add_column`].
    pub fn add_column(&mut self, title: &str) -> Result<ColumnId, BoardError> {
        let id = self.board.add_column(title).inspect_err(log_rejected)?;
        tracing::debug!(column_id = %id, title, "column added");
        Ok(id)
    }

    /// Renames a column.
    ///
    /// # Errors
    ///
    /// See [`Board::rename_column`].
    pub fn rename_column(&mut self, id: ColumnId, title: &str) -> Result<(), BoardError> {
        self.board
            .rename_column(id, title)
            .inspect_err(log_rejected)
    }

    /// Deletes a column once the caller has confirmed losing its tasks.
    ///
    /// # Errors
    ///
    /// See [`Board::delete_column`].
    pub fn delete_column(
        &mut self,
        id: ColumnId,
        confirmation: DeleteConfirmation,
    ) -> Result<ColumnDeletion, BoardError> {
        let outcome = self
            .board
            .delete_column(id, confirmation)
            .inspect_err(log_rejected)?;
        match &outcome {
            ColumnDeletion::Deleted { removed_tasks, .. } => tracing::info!(
                column_id = %id,
                removed_tasks = removed_tasks.len(),
                "column deleted"
            ),
            ColumnDeletion::ConfirmationRequired { affected_tasks, .. } => tracing::debug!(
                column_id = %id,
                affected_tasks,
                "column deletion awaits confirmation"
            ),
        }
        Ok(outcome)
    }

    /// Moves a column to a new position.
    ///
    /// # Errors
    ///
    /// See [`Board::reorder_columns`].
    pub fn reorder_columns(&mut self, from: usize, to: Option<usize>) -> Result<(), BoardError> {
        self.board
            .reorder_columns(from, to)
            .inspect_err(log_rejected)
    }

    /// Creates a task and appends it to a column.
    ///
    /// # Errors
    ///
    /// Returns a title error when the task is rejected, or
    /// [`BoardError::UnknownColumn`] when the column does not exist.
    pub fn create_task(&mut self, column: ColumnId, data: NewTask) -> Result<TaskId, BoardError> {
        let task = Task::new(data, self.board.config().max_title_length, &*self.clock)
            .inspect_err(log_rejected)?;
        let id = self.board.add_task(column, task).inspect_err(log_rejected)?;
        tracing::info!(task_id = %id, column_id = %column, "task created");
        Ok(id)
    }

    /// Moves a task to another column or position.
    ///
    /// # Errors
    ///
    /// See [`Board::move_task`].
    pub fn move_task(
        &mut self,
        task: TaskId,
        to_column: ColumnId,
        to_index: usize,
    ) -> Result<usize, BoardError> {
        self.board
            .move_task(task, to_column, to_index)
            .inspect_err(log_rejected)
    }

    /// Reorders a task within its column.
    ///
    /// # Errors
    ///
    /// See [`Board::reorder_task`].
    pub fn reorder_task(
        &mut self,
        column: ColumnId,
        from: usize,
        to: Option<usize>,
    ) -> Result<(), BoardError> {
        self.board
            .reorder_task(column, from, to)
            .inspect_err(log_rejected)
    }

    /// Updates a task and stamps the update time.
    ///
    /// # Errors
    ///
    /// See [`Board::update_task`].
    pub fn update_task(&mut self, task: TaskId, patch: TaskPatch) -> Result<&Task, BoardError> {
        self.board
            .update_task(task, patch, &*self.clock)
            .inspect_err(log_rejected)
    }

    /// Removes a task from the board.
    ///
    /// # Errors
    ///
    /// See [`Board::remove_task`].
    pub fn remove_task(&mut self, task: TaskId) -> Result<Task, BoardError> {
        let removed = self.board.remove_task(task).inspect_err(log_rejected)?;
        tracing::info!(task_id = %task, "task removed");
        Ok(removed)
    }
}

fn log_rejected(error: &BoardError) {
    tracing::debug!(%error, "board operation rejected");
}
