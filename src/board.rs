use thiserror::Error;

use crate::frontend::TaskRow;
use crate::task::Task;

/// The error returned when a position does not exist (anymore) on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of bounds (the board holds {len} tasks)")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

/// An ordered collection of [`Task`]s, addressed by 0-based position.
///
/// The board starts empty, grows at the end on every add, and shifts later tasks down
/// by one position on every removal, the way a list widget numbers its rows. It
/// exclusively owns its tasks; in-place mutation goes through [`Board::task_at_mut`].
///
/// Nothing here is persisted: the whole list lives and dies with the process.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Board {
    tasks: Vec<Task>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task at the end of the board. This never fails; duplicate names and
    /// times are fine
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Remove and return the task at this position
    pub fn remove_at(&mut self, index: usize) -> Result<Task, IndexError> {
        if index >= self.tasks.len() {
            return Err(IndexError { index, len: self.tasks.len() });
        }
        Ok(self.tasks.remove(index))
    }

    /// Returns the task at this position
    pub fn task_at(&self, index: usize) -> Result<&Task, IndexError> {
        let len = self.tasks.len();
        self.tasks.get(index).ok_or(IndexError { index, len })
    }

    /// Returns the task at this position, mutably
    pub fn task_at_mut(&mut self, index: usize) -> Result<&mut Task, IndexError> {
        let len = self.tasks.len();
        self.tasks.get_mut(index).ok_or(IndexError { index, len })
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate over `(position, task)` pairs in insertion order.
    /// Re-iterating re-reads the current state.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.tasks.iter().enumerate()
    }

    /// Iterate mutably, in insertion order. This is how bulk edits (like the alarm
    /// scan marking rung tasks done) touch tasks without disturbing their positions
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut Task)> {
        self.tasks.iter_mut().enumerate()
    }

    /// A snapshot of the whole board, in insertion order, as a frontend should draw it
    pub fn rows(&self) -> Vec<TaskRow> {
        self.tasks.iter().map(TaskRow::from).collect()
    }
}
