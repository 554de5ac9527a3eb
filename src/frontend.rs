//! Utilities to keep a frontend informed about the task list
//!
//! The core never draws anything itself. Both mutation sources (user commands and the
//! alarm scheduler) push [`UiEvent`]s through a channel; whatever presentation layer
//! hosts this crate pops them and re-draws.

use std::fmt::{Display, Error, Formatter};

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::task::Task;

/// One row of the task list, as a frontend should draw it.
///
/// Rows serialize in camelCase (`displayName`, `iconCategory`, `isDone`), so a
/// frontend living across an IPC boundary can forward the JSON verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRow {
    /// The text to display for this row
    pub display_name: String,
    /// The category whose icon should decorate this row
    pub icon_category: Category,
    /// Whether the row should be styled as done (checkmark, strikethrough, ...)
    pub is_done: bool,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            display_name: task.name().to_string(),
            icon_category: task.category(),
            is_done: task.completed(),
        }
    }
}

/// An event the core sends to the presentation layer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum UiEvent {
    /// The task list has changed and should be re-drawn from this snapshot
    ListChanged(Vec<TaskRow>),
    /// A message the user must see: a ringing reminder, or why a command was refused
    Alert(String),
}

impl Display for UiEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            UiEvent::ListChanged(rows) => write!(f, "task list changed ({} tasks)", rows.len()),
            UiEvent::Alert(message) => write!(f, "{}", message),
        }
    }
}

/// See [`ui_channel`]
pub type UiSender = tokio::sync::mpsc::UnboundedSender<UiEvent>;
/// See [`ui_channel`]
pub type UiReceiver = tokio::sync::mpsc::UnboundedReceiver<UiEvent>;

/// Create the channel a frontend listens on.
///
/// The channel is unbounded: senders never block, so events can be pushed from inside
/// the task-list lock and an alarm tick still completes well within its period.
pub fn ui_channel() -> (UiSender, UiReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}

/// The core's handle to the presentation layer.
///
/// Every event is mirrored to the `log` macros. A handle built without a channel
/// (e.g. in a headless embedding, or in tests that only care about return values)
/// only logs.
#[derive(Clone)]
pub struct FrontEnd {
    channel: Option<UiSender>,
}
impl FrontEnd {
    pub fn new() -> Self {
        Self { channel: None }
    }
    pub fn new_with_channel(channel: UiSender) -> Self {
        Self { channel: Some(channel) }
    }

    /// Ask the frontend to re-draw the task list from this snapshot
    pub fn render(&self, rows: Vec<TaskRow>) {
        log::debug!("Task list changed ({} tasks)", rows.len());
        self.send(UiEvent::ListChanged(rows));
    }

    /// Surface a message to the user
    pub fn alert(&self, message: &str) {
        log::info!("{}", message);
        self.send(UiEvent::Alert(message.to_string()));
    }

    fn send(&self, event: UiEvent) {
        if let Some(sender) = &self.channel {
            // A closed channel means the frontend is gone; nobody is left to tell
            let _ = sender.send(event);
        }
    }
}

impl Default for FrontEnd {
    fn default() -> Self {
        Self::new()
    }
}
