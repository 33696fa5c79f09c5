//! Ordering engine tests for columns and tasks.

use crate::board::domain::{
    Board, BoardConfig, BoardError, Column, ColumnDeletion, ColumnId, DeleteConfirmation, NewTask,
    Task, TaskId, TaskPatch, TaskPriority,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

fn titles(board: &Board) -> Vec<&str> {
    board
        .columns()
        .iter()
        .map(|column| column.title().as_str())
        .collect()
}

fn new_task(board: &Board, title: &str) -> Task {
    Task::new(
        NewTask::new(title, "ana"),
        board.config().max_title_length,
        &DefaultClock,
    )
    .expect("valid task")
}

#[fixture]
fn board() -> Board {
    Board::seeded(BoardConfig::default()).expect("default columns are valid")
}

fn column_at(board: &Board, index: usize) -> ColumnId {
    board
        .columns()
        .get(index)
        .map(Column::id)
        .expect("column exists")
}

fn add(board: &mut Board, column: ColumnId, title: &str) -> TaskId {
    let task = new_task(board, title);
    board.add_task(column, task).expect("task added")
}

#[rstest]
fn seeded_board_has_default_columns(board: Board) {
    assert_eq!(titles(&board), ["To Do", "In Progress", "Done"]);
    assert_eq!(board.task_count(), 0);
}

#[rstest]
fn add_column_trims_and_appends(mut board: Board) {
    let id = board.add_column("  Review ").expect("valid title");

    assert_eq!(titles(&board).last(), Some(&"Review"));
    assert!(board.column(id).is_some_and(Column::is_empty));
}

#[rstest]
#[case::empty("")]
#[case::whitespace("   ")]
fn blank_column_titles_are_rejected(mut board: Board, #[case] title: &str) {
    assert_eq!(board.add_column(title), Err(BoardError::BlankColumnTitle));
    assert_eq!(board.columns().len(), 3);
}

#[rstest]
fn overlong_titles_are_rejected() {
    let mut board = Board::new(BoardConfig::default().with_max_title_length(5));

    assert_eq!(
        board.add_column("Backlog"),
        Err(BoardError::TitleTooLong { max: 5 })
    );
    assert!(board.add_column("Ready").is_ok());
}

#[rstest]
fn rename_column_replaces_title_in_place(mut board: Board) {
    let doing = column_at(&board, 1);

    board.rename_column(doing, "Doing").expect("valid title");
    assert_eq!(titles(&board), ["To Do", "Doing", "Done"]);
    assert_eq!(
        board.rename_column(doing, " "),
        Err(BoardError::BlankColumnTitle)
    );
    assert_eq!(titles(&board), ["To Do", "Doing", "Done"]);
}

#[rstest]
fn rename_unknown_column_fails(mut board: Board) {
    let missing = ColumnId::new();
    assert_eq!(
        board.rename_column(missing, "Later"),
        Err(BoardError::UnknownColumn(missing))
    );
}

#[rstest]
fn reorder_moves_a_single_column() {
    let mut board = Board::new(BoardConfig::empty());
    for title in ["A", "B", "C"] {
        board.add_column(title).expect("valid title");
    }

    board.reorder_columns(0, Some(2)).expect("positions in range");

    assert_eq!(titles(&board), ["B", "C", "A"]);
}

#[rstest]
fn reorder_without_destination_is_a_noop(mut board: Board) {
    assert_eq!(
        board.reorder_columns(0, None),
        Err(BoardError::NoDestination)
    );
    assert_eq!(titles(&board), ["To Do", "In Progress", "Done"]);
}

#[rstest]
#[case(3, Some(0), 3)]
#[case(0, Some(3), 3)]
fn reorder_out_of_range_is_a_noop(
    mut board: Board,
    #[case] from: usize,
    #[case] to: Option<usize>,
    #[case] index: usize,
) {
    assert_eq!(
        board.reorder_columns(from, to),
        Err(BoardError::IndexOutOfRange { index, len: 3 })
    );
    assert_eq!(titles(&board), ["To Do", "In Progress", "Done"]);
}

#[rstest]
fn reordering_columns_keeps_task_count(mut board: Board) {
    let todo = column_at(&board, 0);
    add(&mut board, todo, "Write brief");
    add(&mut board, todo, "Call supplier");

    board.reorder_columns(0, Some(1)).expect("positions in range");
    board.rename_column(todo, "Backlog").expect("valid title");

    assert_eq!(board.task_count(), 2);
    assert!(board.is_consistent());
}

#[rstest]
fn deleting_empty_column_needs_no_confirmation(mut board: Board) {
    let done = column_at(&board, 2);

    let outcome = board
        .delete_column(done, DeleteConfirmation::Unconfirmed)
        .expect("column exists");

    assert!(matches!(
        outcome,
        ColumnDeletion::Deleted { ref removed_tasks, .. } if removed_tasks.is_empty()
    ));
    assert_eq!(titles(&board), ["To Do", "In Progress"]);
}

#[rstest]
fn deleting_non_empty_column_requires_confirmation(mut board: Board) {
    let todo = column_at(&board, 0);
    let first = add(&mut board, todo, "Write brief");
    add(&mut board, todo, "Call supplier");

    let pending = board
        .delete_column(todo, DeleteConfirmation::Unconfirmed)
        .expect("column exists");

    assert_eq!(
        pending,
        ColumnDeletion::ConfirmationRequired {
            column_id: todo,
            affected_tasks: 2,
        }
    );
    assert_eq!(board.task_count(), 2);

    let confirmed = board
        .delete_column(todo, DeleteConfirmation::Confirmed)
        .expect("column exists");

    let ColumnDeletion::Deleted { removed_tasks, .. } = confirmed else {
        panic!("expected deletion, got {confirmed:?}");
    };
    assert_eq!(removed_tasks.len(), 2);
    assert_eq!(board.task_count(), 0);
    assert!(board.task(first).is_none());
    assert!(board.is_consistent());
}

#[rstest]
fn move_task_transfers_ownership(mut board: Board) {
    let todo = column_at(&board, 0);
    let doing = column_at(&board, 1);
    let task = add(&mut board, todo, "Write brief");
    add(&mut board, doing, "Review deck");

    let position = board.move_task(task, doing, 0).expect("task and column exist");

    assert_eq!(position, 0);
    assert!(board.column(todo).is_some_and(Column::is_empty));
    assert_eq!(
        board.status_of(task).map(|column| column.title().as_str()),
        Some("In Progress")
    );
    assert_eq!(board.task_count(), 2);
    assert!(board.is_consistent());
}

#[rstest]
fn move_task_clamps_the_destination_index(mut board: Board) {
    let todo = column_at(&board, 0);
    let done = column_at(&board, 2);
    let task = add(&mut board, todo, "Write brief");

    assert_eq!(board.move_task(task, done, 42), Ok(0));
}

#[rstest]
fn move_within_the_same_column_reorders(mut board: Board) {
    let todo = column_at(&board, 0);
    let first = add(&mut board, todo, "First");
    let second = add(&mut board, todo, "Second");

    assert_eq!(board.move_task(first, todo, 1), Ok(1));
    assert_eq!(
        board.column(todo).map(|column| column.tasks().to_vec()),
        Some(vec![second, first])
    );
}

#[rstest]
fn move_to_unknown_column_leaves_task_in_place(mut board: Board) {
    let todo = column_at(&board, 0);
    let task = add(&mut board, todo, "Write brief");
    let missing = ColumnId::new();

    assert_eq!(
        board.move_task(task, missing, 0),
        Err(BoardError::UnknownColumn(missing))
    );
    assert_eq!(board.status_of(task).map(Column::id), Some(todo));
}

#[rstest]
fn reorder_task_within_column(mut board: Board) {
    let todo = column_at(&board, 0);
    let ids: Vec<TaskId> = ["A", "B", "C"]
        .into_iter()
        .map(|title| add(&mut board, todo, title))
        .collect();

    board.reorder_task(todo, 2, Some(0)).expect("positions in range");

    let ordered: Vec<&str> = board
        .tasks_in(todo)
        .expect("column exists")
        .into_iter()
        .map(Task::title)
        .collect();
    assert_eq!(ordered, ["C", "A", "B"]);
    assert_eq!(board.task_count(), ids.len());
    assert_eq!(
        board.reorder_task(todo, 0, None),
        Err(BoardError::NoDestination)
    );
}

#[rstest]
fn duplicate_task_is_rejected(mut board: Board) {
    let todo = column_at(&board, 0);
    let done = column_at(&board, 2);
    let task = new_task(&board, "Write brief");
    let copy = task.clone();
    let id = board.add_task(todo, task).expect("task added");

    assert_eq!(board.add_task(done, copy), Err(BoardError::DuplicateTask(id)));
    assert_eq!(board.task_count(), 1);
}

#[rstest]
fn remove_task_drops_record_and_reference(mut board: Board) {
    let todo = column_at(&board, 0);
    let task = add(&mut board, todo, "Write brief");

    let removed = board.remove_task(task).expect("task exists");

    assert_eq!(removed.title(), "Write brief");
    assert_eq!(board.task_count(), 0);
    assert_eq!(board.remove_task(task), Err(BoardError::UnknownTask(task)));
}

#[rstest]
fn update_task_rejects_blank_title_without_changes(mut board: Board) {
    let todo = column_at(&board, 0);
    let task = add(&mut board, todo, "Write brief");
    let patch = TaskPatch {
        title: Some("  ".to_owned()),
        priority: Some(TaskPriority::Urgent),
        ..TaskPatch::default()
    };

    assert_eq!(
        board.update_task(task, patch, &DefaultClock),
        Err(BoardError::BlankTaskTitle)
    );
    assert_eq!(
        board.task(task).map(Task::priority),
        Some(TaskPriority::Medium)
    );
}

#[rstest]
fn board_round_trips_through_json(mut board: Board) {
    let todo = column_at(&board, 0);
    add(&mut board, todo, "Write brief");

    let json = serde_json::to_string(&board).expect("board serializes");
    let restored: Board = serde_json::from_str(&json).expect("board deserializes");

    assert_eq!(restored, board);
}
