//! Error types for board operations.
//!
//! Every error leaves the board exactly as it was before the call.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Rejected board operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Column titles must contain a non-whitespace character.
    #[error("column title must not be empty")]
    BlankColumnTitle,

    /// Task titles must contain a non-whitespace character.
    #[error("task title must not be empty")]
    BlankTaskTitle,

    /// Titles are limited in length.
    #[error("title must be at most {max} characters")]
    TitleTooLong {
        /// Maximum number of characters.
        max: usize,
    },

    /// The column does not exist on this board.
    #[error("column not found: {0}")]
    UnknownColumn(ColumnId),

    /// The task does not exist on this board.
    #[error("task not found: {0}")]
    UnknownTask(TaskId),

    /// A task with the same identifier is already on the board.
    #[error("task already on board: {0}")]
    DuplicateTask(TaskId),

    /// A drag ended without a drop destination.
    #[error("no drop destination")]
    NoDestination,

    /// A position lies outside the sequence being reordered.
    #[error("position {index} out of range for {len} item(s)")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },
}
