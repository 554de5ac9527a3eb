///! Some utility functions

use std::io::{stdin, stdout, Read, Write};

use crate::frontend::TaskRow;

/// A debug utility that pretty-prints a task list snapshot
pub fn print_rows(rows: &[TaskRow]) {
    for row in rows {
        let completion = if row.is_done { "✓" } else { " " };
        println!("    {} [{}] {}", completion, row.icon_category, row.display_name);
    }
}

/// Wait for the user to press enter
pub fn pause() {
    let mut stdout = stdout();
    stdout.write_all(b"Press Enter to continue...").unwrap();
    stdout.flush().unwrap();
    stdin().read_exact(&mut [0]).unwrap();
}
