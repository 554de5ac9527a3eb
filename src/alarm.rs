//! The alarm side of the board: a one-second scan that rings due reminders
//!
//! A reminder matches when the wall clock's (hour, minute) equal the task's scheduled
//! (hour, minute); seconds never take part. The match window is thus a whole minute
//! wide, and the scan closes it by completing the task on the first hit, so every
//! reminder rings exactly once. There is no catch-up: a task created after its time
//! stays silent until the clock wraps around to the same (hour, minute) again, and a
//! window missed entirely (say, the host was suspended) is not made up for.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{Local, NaiveTime, Timelike};

use crate::board::Board;
use crate::config::REMINDER_PREFIX;
use crate::frontend::FrontEnd;

/// How often [`AlarmScheduler::run`] re-reads the clock
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Scans a [`Board`] on a fixed tick and rings a one-time notification for every
/// pending task whose reminder matches the current time.
///
/// The scheduler shares its board with [`Commands`](crate::Commands). Each scan holds
/// the lock for its whole pass, so ticks and user commands never interleave
/// mid-mutation.
pub struct AlarmScheduler {
    board: Arc<Mutex<Board>>,
    frontend: FrontEnd,
}

impl AlarmScheduler {
    pub fn new(board: Arc<Mutex<Board>>, frontend: FrontEnd) -> Self {
        Self { board, frontend }
    }

    /// Run one scan against this clock value, ringing and completing every pending
    /// task scheduled for the same (hour, minute). Returns how many reminders rang.
    ///
    /// [`run`](Self::run) calls this once a second with the current local time. Call
    /// it directly to drive the alarm from your own event loop (or from a test, with
    /// whatever clock you fancy).
    pub fn check_at(&self, now: NaiveTime) -> usize {
        log::trace!("Alarm tick at {}", now);
        let mut board = self.board.lock().unwrap();
        let mut n_rung = 0;

        for (_position, task) in board.iter_mut() {
            if task.completed() {
                continue;
            }
            let rings_now = match task.reminder() {
                Some(scheduled) => {
                    scheduled.hour() == now.hour() && scheduled.minute() == now.minute()
                }
                None => false,
            };
            if rings_now == false {
                continue;
            }

            log::debug!("Task '{}' is due (the clock reads {})", task.name(), now);
            self.frontend
                .alert(&format!("{}: {}", REMINDER_PREFIX.lock().unwrap(), task.name()));
            // Completing the task is what ends its match window for good
            task.mark_done();
            n_rung += 1;
        }

        if n_rung > 0 {
            // A single snapshot covers every task this scan completed
            self.frontend.render(board.rows());
        }
        n_rung
    }

    /// Run the scheduler forever, scanning once a second against the current local
    /// time.
    ///
    /// Spawn this at application launch; it only stops when the runtime driving it
    /// goes away. Hosts that already have a periodic timer can skip it and call
    /// [`check_at`](Self::check_at) themselves instead.
    pub async fn run(self) {
        log::info!("Alarm scheduler started ({:?} tick)", TICK_PERIOD);
        let mut interval = tokio::time::interval(TICK_PERIOD);
        loop {
            interval.tick().await;
            self.check_at(Local::now().time());
        }
    }
}
