//! Board session workflows.

use super::helpers::{board, init_tracing};
use crmboard::board::domain::{
    Column, ColumnDeletion, ColumnId, DeleteConfirmation, NewTask, Task, TaskPriority,
};
use crmboard::board::services::BoardSession;
use mockable::DefaultClock;
use rstest::rstest;

fn column_ids(session: &BoardSession<DefaultClock>) -> Vec<ColumnId> {
    session.board().columns().iter().map(Column::id).collect()
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn tasks_flow_through_columns_without_loss(
    mut board: BoardSession<DefaultClock>,
) -> eyre::Result<()> {
    let ids = column_ids(&board);
    let [todo, doing, done] = ids.as_slice() else {
        eyre::bail!("expected three seeded columns");
    };
    let mut tasks = Vec::new();
    for title in ["Brief", "Design", "Build", "Ship"] {
        tasks.push(board.create_task(*todo, NewTask::new(title, "ana"))?);
    }

    for (offset, task) in tasks.iter().enumerate() {
        board.move_task(*task, *doing, offset)?;
    }
    board.reorder_task(*doing, 3, Some(0))?;
    board.reorder_columns(2, Some(0))?;
    board.rename_column(*done, "Shipped")?;
    if let Some(first) = tasks.first() {
        board.move_task(*first, *done, usize::MAX)?;
    }

    assert_eq!(board.board().task_count(), tasks.len());
    assert!(board.board().is_consistent());
    let titles: Vec<&str> = board
        .board()
        .tasks_in(*doing)?
        .into_iter()
        .map(Task::title)
        .collect();
    assert_eq!(titles, ["Ship", "Design", "Build"]);
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn rejected_operations_leave_the_board_untouched(
    mut board: BoardSession<DefaultClock>,
) -> eyre::Result<()> {
    init_tracing();
    let ids = column_ids(&board);
    let todo = *ids.first().ok_or_else(|| eyre::eyre!("no columns"))?;
    board.create_task(
        todo,
        NewTask::new("Brief", "ana").with_priority(TaskPriority::Urgent),
    )?;
    let before = board.board().clone();

    assert!(board.add_column("   ").is_err());
    assert!(board.reorder_columns(0, None).is_err());
    assert!(board.reorder_columns(7, Some(0)).is_err());
    assert!(board.reorder_task(todo, 0, Some(5)).is_err());
    assert_eq!(
        board.delete_column(todo, DeleteConfirmation::Unconfirmed)?,
        ColumnDeletion::ConfirmationRequired {
            column_id: todo,
            affected_tasks: 1,
        }
    );

    assert_eq!(board.board(), &before);
    Ok(())
}
