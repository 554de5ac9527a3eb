//! To-do tasks

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveTime, Utc};

use crate::category::Category;

/// Whether a task has been done yet.
///
/// Rather than a plain boolean, this records *when* the task was completed, whether by
/// the user or by its reminder ringing. There is no way back from `Completed`: this
/// crate has no "undo" operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CompletionStatus {
    Completed(DateTime<Utc>),
    Uncompleted,
}
impl CompletionStatus {
    pub fn is_completed(&self) -> bool {
        match self {
            CompletionStatus::Completed(_) => true,
            _ => false,
        }
    }
}

/// A to-do task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Persistent identifier for this task.
    /// Positions in the list shift on every deletion, so frontends that need a stable
    /// row identity across re-renders should key on this instead
    uid: String,

    /// The time this task was created
    creation_date: DateTime<Utc>,
    /// The completion status of this task
    completion_status: CompletionStatus,

    /// The display name of the task
    name: String,
    /// The kind of task. Frontends use it to pick a display icon
    category: Category,
    /// The wall-clock time of day this task's reminder should ring, if it has one.
    /// Only the hour and the minute take part in the alarm match; seconds are ignored
    reminder: Option<NaiveTime>,
}


impl Task {
    /// Create a brand new, uncompleted Task.
    /// This will pick a new (random) uid.
    pub fn new(name: String, category: Category, reminder: Option<NaiveTime>) -> Self {
        Self {
            uid: Uuid::new_v4().hyphenated().to_string(),
            creation_date: Utc::now(),
            completion_status: CompletionStatus::Uncompleted,
            name,
            category,
            reminder,
        }
    }

    pub fn uid(&self) -> &str           { &self.uid      }
    pub fn name(&self) -> &str          { &self.name     }
    pub fn category(&self) -> Category  { self.category  }
    pub fn reminder(&self) -> Option<NaiveTime>           { self.reminder }
    pub fn completed(&self) -> bool     { self.completion_status.is_completed() }
    pub fn creation_date(&self) -> &DateTime<Utc>         { &self.creation_date }
    pub fn completion_status(&self) -> &CompletionStatus  { &self.completion_status }

    /// Mark this task as done, stamping the current time.
    ///
    /// Marking an already-done task again is a no-op that keeps the original
    /// completion time, so both the user and the alarm can complete a task without
    /// stepping on each other.
    pub fn mark_done(&mut self) {
        if self.completion_status.is_completed() {
            return;
        }
        self.completion_status = CompletionStatus::Completed(Utc::now());
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.completed() {
            true => write!(f, "{} ✓", self.name),
            false => write!(f, "{}", self.name),
        }
    }
}
