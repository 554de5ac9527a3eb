//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The application name, that frontends can use as a window or dialog title.
/// Feel free to override it when initing this library.
pub static APP_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Corkboard".to_string())));

/// The prefix of the message a ringing reminder surfaces to the user (example of a full message: `Reminder: Buy milk`).
/// Feel free to override it when initing this library.
pub static REMINDER_PREFIX: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Reminder".to_string())));
