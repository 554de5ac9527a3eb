//! This crate provides the core of a small to-do list app.
//!
//! Tasks live on a [`Board`], in the order they were added. Edits triggered by the user go through [`Commands`], which validates them and reports refusals the same way it reports everything else: as [`UiEvent`]s on a channel the presentation layer listens on (see the [`frontend`] module).
//!
//! Every task can carry a reminder time. An [`AlarmScheduler`] scans the board every second and rings a notification for every pending task whose reminder matches the wall clock. \
//! The scheduler marks rung tasks as done, so a reminder never rings twice.
//!
//! This crate does not draw anything: plug in whatever GUI (or TUI, or test harness) you like, and have it pop events from [`ui_channel`].

mod category;
pub use category::{Category, ParseCategoryError};
mod task;
pub use task::{CompletionStatus, Task};
mod board;
pub use board::{Board, IndexError};

mod commands;
pub use commands::{Commands, SelectionError, ValidationError};
mod alarm;
pub use alarm::AlarmScheduler;

pub mod frontend;
pub use frontend::{ui_channel, FrontEnd, TaskRow, UiEvent};

pub mod config;
pub mod utils;
