//! User commands: everything a frontend's buttons can do to the board

use std::sync::{Arc, Mutex};

use chrono::NaiveTime;
use thiserror::Error;

use crate::board::{Board, IndexError};
use crate::category::Category;
use crate::frontend::FrontEnd;
use crate::task::Task;

/// The error returned when a new task's input is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The task name was empty, or nothing but whitespace
    #[error("the task name is empty")]
    EmptyName,
}

/// The error returned when a command needs a selected row and got none, or a stale one
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No row is currently selected
    #[error("no task is selected")]
    NoSelection,
    /// The selection points past the end of the list (it shrank since the row was picked)
    #[error(transparent)]
    OutOfRange(#[from] IndexError),
}

/// The set of commands a frontend can apply to a [`Board`].
///
/// A `Commands` is constructed over the same shared board as the
/// [`AlarmScheduler`](crate::AlarmScheduler); the mutex keeps each command's whole
/// validate-and-mutate pass atomic relative to alarm ticks.
///
/// Each successful mutation pushes a fresh [`ListChanged`](crate::UiEvent::ListChanged)
/// snapshot to the frontend; each rejected one pushes an
/// [`Alert`](crate::UiEvent::Alert) with the dialog text to display, and leaves the
/// board untouched. On top of the alert, failures also come back as typed errors, so
/// embedders and tests can match on what went wrong.
///
/// The selected row is an explicit `Option<usize>`: `None` is the "no row selected"
/// sentinel (what a list widget usually reports as -1).
pub struct Commands {
    board: Arc<Mutex<Board>>,
    frontend: FrontEnd,
}

impl Commands {
    pub fn new(board: Arc<Mutex<Board>>, frontend: FrontEnd) -> Self {
        Self { board, frontend }
    }

    /// Add a task to the end of the board.
    ///
    /// The name is trimmed before both the emptiness check and storage. An
    /// all-whitespace name is rejected with [`ValidationError::EmptyName`] and the
    /// board stays as it was. `Ok` is the frontend's cue to clear its name input.
    ///
    /// Hour/minute ranges are not re-checked here: by the time the input widget has
    /// built a [`NaiveTime`], they hold by construction.
    pub fn add_task(&self, name: &str, category: Category, reminder: Option<NaiveTime>)
        -> Result<(), ValidationError>
    {
        let name = name.trim();
        if name.is_empty() {
            log::warn!("Refusing to add a task with an empty name");
            self.frontend.alert("Please enter a task!");
            return Err(ValidationError::EmptyName);
        }

        log::debug!("Adding task '{}' ({}, reminder: {:?})", name, category, reminder);
        let mut board = self.board.lock().unwrap();
        board.add(Task::new(name.to_string(), category, reminder));
        // Send while the board is still locked, so snapshots reach the frontend in mutation order
        self.frontend.render(board.rows());
        Ok(())
    }

    /// Delete the selected task, shifting every later row down by one position.
    pub fn delete_selected(&self, selected: Option<usize>) -> Result<Task, SelectionError> {
        let index = match selected {
            None => {
                log::warn!("Asked to delete a task, but no row is selected");
                self.frontend.alert("Select a task to delete!");
                return Err(SelectionError::NoSelection);
            },
            Some(index) => index,
        };

        let mut board = self.board.lock().unwrap();
        match board.remove_at(index) {
            Err(err) => {
                log::warn!("Asked to delete a task that is not there: {}", err);
                self.frontend.alert("Select a task to delete!");
                Err(err.into())
            },
            Ok(removed) => {
                log::debug!("Deleted task '{}' from position {}", removed.name(), index);
                self.frontend.render(board.rows());
                Ok(removed)
            },
        }
    }

    /// Mark the selected task as done.
    ///
    /// Idempotent: marking an already-done task succeeds and changes nothing (the
    /// alarm may have beaten the user to it).
    pub fn mark_selected_done(&self, selected: Option<usize>) -> Result<(), SelectionError> {
        let index = match selected {
            None => {
                log::warn!("Asked to mark a task done, but no row is selected");
                self.frontend.alert("Select a task to mark done!");
                return Err(SelectionError::NoSelection);
            },
            Some(index) => index,
        };

        let mut board = self.board.lock().unwrap();
        match board.task_at_mut(index) {
            Err(err) => {
                log::warn!("Asked to mark done a task that is not there: {}", err);
                self.frontend.alert("Select a task to mark done!");
                Err(err.into())
            },
            Ok(task) => {
                log::debug!("Marking task '{}' (position {}) as done", task.name(), index);
                task.mark_done();
                self.frontend.render(board.rows());
                Ok(())
            },
        }
    }
}
