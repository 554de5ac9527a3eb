//! Tests for the command side: what a frontend's buttons can and cannot do


use harness::{at, expect_alert, expect_no_event, expect_snapshot, wired_board};

use corkboard::{Category, IndexError, SelectionError, ValidationError};

#[test]
fn test_add_tasks() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (commands, _alarm, board, mut ui) = wired_board();

    commands.add_task("Buy milk", Category::Shopping, Some(at(14, 0))).unwrap();
    commands.add_task("Review chapter 4", Category::Study, None).unwrap();
    commands.add_task("  Morning run  ", Category::Exercise, Some(at(7, 0))).unwrap();

    assert_eq!(board.lock().unwrap().len(), 3);

    // One snapshot per successful add, in mutation order
    assert_eq!(expect_snapshot(&mut ui).len(), 1);
    assert_eq!(expect_snapshot(&mut ui).len(), 2);
    let rows = expect_snapshot(&mut ui);
    expect_no_event(&mut ui);

    let names: Vec<&str> = rows.iter().map(|row| row.display_name.as_str()).collect();
    // Insertion order, with names trimmed on the way in
    assert_eq!(names, ["Buy milk", "Review chapter 4", "Morning run"]);
    assert_eq!(rows[0].icon_category, Category::Shopping);
    assert!(rows.iter().all(|row| row.is_done == false));
}

#[test]
fn test_add_empty_name() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (commands, _alarm, board, mut ui) = wired_board();

    let err = commands.add_task("", Category::Shopping, None).unwrap_err();
    assert_eq!(err, ValidationError::EmptyName);
    let err = commands.add_task("  \t ", Category::Study, Some(at(9, 0))).unwrap_err();
    assert_eq!(err, ValidationError::EmptyName);

    // The refusals reached the user as dialogs, and nothing was stored or re-drawn
    assert_eq!(board.lock().unwrap().len(), 0);
    assert_eq!(expect_alert(&mut ui), "Please enter a task!");
    assert_eq!(expect_alert(&mut ui), "Please enter a task!");
    expect_no_event(&mut ui);
}

#[test]
fn test_delete_selected() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (commands, _alarm, board, mut ui) = wired_board();

    commands.add_task("Buy milk", Category::Shopping, None).unwrap();
    commands.add_task("Review chapter 4", Category::Study, None).unwrap();
    commands.add_task("Morning run", Category::Exercise, None).unwrap();
    for _ in 0..3 {
        expect_snapshot(&mut ui);
    }

    let removed = commands.delete_selected(Some(1)).unwrap();
    assert_eq!(removed.name(), "Review chapter 4");

    // Later rows shifted down by one
    let rows = expect_snapshot(&mut ui);
    let names: Vec<&str> = rows.iter().map(|row| row.display_name.as_str()).collect();
    assert_eq!(names, ["Buy milk", "Morning run"]);
    expect_no_event(&mut ui);
    assert_eq!(board.lock().unwrap().len(), 2);
}

#[test]
fn test_delete_refusals() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (commands, _alarm, board, mut ui) = wired_board();

    commands.add_task("Buy milk", Category::Shopping, None).unwrap();
    expect_snapshot(&mut ui);

    assert_eq!(commands.delete_selected(None).unwrap_err(), SelectionError::NoSelection);
    assert_eq!(expect_alert(&mut ui), "Select a task to delete!");

    // A selection that outlived a shrink is refused the same way, but stays
    // distinguishable for embedders
    let err = commands.delete_selected(Some(4)).unwrap_err();
    assert_eq!(err, SelectionError::OutOfRange(IndexError { index: 4, len: 1 }));
    assert_eq!(expect_alert(&mut ui), "Select a task to delete!");

    expect_no_event(&mut ui);
    assert_eq!(board.lock().unwrap().len(), 1);
}

#[test]
fn test_mark_selected_done() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (commands, _alarm, board, mut ui) = wired_board();

    commands.add_task("Buy milk", Category::Shopping, None).unwrap();
    commands.add_task("Morning run", Category::Exercise, None).unwrap();
    expect_snapshot(&mut ui);
    expect_snapshot(&mut ui);

    commands.mark_selected_done(Some(0)).unwrap();

    let rows = expect_snapshot(&mut ui);
    assert!(rows[0].is_done);
    assert!(rows[1].is_done == false);
    expect_no_event(&mut ui);
    assert!(board.lock().unwrap().task_at(0).unwrap().completed());
}

#[test]
fn test_mark_done_twice() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (commands, _alarm, board, mut ui) = wired_board();

    commands.add_task("Buy milk", Category::Shopping, None).unwrap();
    expect_snapshot(&mut ui);

    // Marking an already-done task again succeeds and changes nothing
    commands.mark_selected_done(Some(0)).unwrap();
    commands.mark_selected_done(Some(0)).unwrap();

    assert!(board.lock().unwrap().task_at(0).unwrap().completed());
    // Both calls counted as successful commands, so both re-rendered
    assert!(expect_snapshot(&mut ui)[0].is_done);
    assert!(expect_snapshot(&mut ui)[0].is_done);
    expect_no_event(&mut ui);
}

#[test]
fn test_mark_done_refusals() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (commands, _alarm, board, mut ui) = wired_board();

    commands.add_task("Buy milk", Category::Shopping, None).unwrap();
    expect_snapshot(&mut ui);

    assert_eq!(commands.mark_selected_done(None).unwrap_err(), SelectionError::NoSelection);
    assert_eq!(expect_alert(&mut ui), "Select a task to mark done!");

    let err = commands.mark_selected_done(Some(2)).unwrap_err();
    assert_eq!(err, SelectionError::OutOfRange(IndexError { index: 2, len: 1 }));
    assert_eq!(expect_alert(&mut ui), "Select a task to mark done!");

    expect_no_event(&mut ui);
    // No task was mutated along any failure path
    assert!(board.lock().unwrap().task_at(0).unwrap().completed() == false);
}

#[test]
fn test_a_whole_session() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (commands, _alarm, board, mut ui) = wired_board();

    // Add one task and check how it should be drawn
    commands.add_task("Buy milk", Category::Shopping, Some(at(14, 0))).unwrap();
    let rows = expect_snapshot(&mut ui);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].display_name, "Buy milk");
    assert_eq!(rows[0].icon_category, Category::Shopping);
    assert!(rows[0].is_done == false);

    // Delete it: the board is empty again
    commands.delete_selected(Some(0)).unwrap();
    assert!(expect_snapshot(&mut ui).is_empty());

    // Add it back and mark it done
    commands.add_task("Buy milk", Category::Shopping, Some(at(14, 0))).unwrap();
    expect_snapshot(&mut ui);
    commands.mark_selected_done(Some(0)).unwrap();
    let rows = expect_snapshot(&mut ui);
    assert!(rows[0].is_done);

    // The board holds a single task, so a leftover selection of row 1 is stale
    let err = commands.delete_selected(Some(1)).unwrap_err();
    assert!(matches!(err, SelectionError::OutOfRange(_)));
    assert_eq!(expect_alert(&mut ui), "Select a task to delete!");

    expect_no_event(&mut ui);
    assert_eq!(board.lock().unwrap().len(), 1);
}
