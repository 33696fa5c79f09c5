//! Domain model for the task board.

mod board;
mod column;
mod config;
mod error;
mod ids;
mod task;

pub use board::{Board, ColumnDeletion, DeleteConfirmation};
pub use column::{Column, ColumnTitle};
pub use config::{BoardConfig, DEFAULT_COLUMN_TITLES, DEFAULT_MAX_TITLE_LENGTH};
pub use error::BoardError;
pub use ids::{ColumnId, TaskId};
pub use task::{NewTask, Task, TaskPatch, TaskPriority};
