//! This is an example of how corkboard can be used
//!
//! It plays the part of a frontend: it drives the board with commands, and prints
//! whatever the core asks a frontend to display.

use std::sync::{Arc, Mutex};

use chrono::{Duration, Local, NaiveTime};

use corkboard::config::APP_NAME;
use corkboard::frontend::UiReceiver;
use corkboard::utils::{pause, print_rows};
use corkboard::{ui_channel, AlarmScheduler, Board, Category, Commands, FrontEnd, UiEvent};

#[tokio::main]
async fn main() {
    env_logger::init();

    println!("==== {} ====", APP_NAME.lock().unwrap());
    println!("This demo plays the part of a GUI: it drives the task board, and prints whatever the core asks a frontend to display.");
    println!("You can set the RUST_LOG environment variable to display more info about what the core is doing.");
    println!();

    let (sender, mut ui) = ui_channel();
    let frontend = FrontEnd::new_with_channel(sender);
    let board = Arc::new(Mutex::new(Board::new()));
    let commands = Commands::new(Arc::clone(&board), frontend.clone());
    tokio::spawn(AlarmScheduler::new(Arc::clone(&board), frontend).run());

    add_a_few_tasks(&commands, &mut ui);
    misuse_the_commands(&commands, &mut ui);
    complete_and_delete(&commands, &mut ui);
    wait_for_a_reminder(&commands, &mut ui).await;

    println!("\nDone. You can start this demo again with RUST_LOG=debug to see the core's side of it.");
}

fn add_a_few_tasks(commands: &Commands, ui: &mut UiReceiver) {
    println!("\nFirst, let's fill the board.");
    pause();

    commands.add_task("Buy groceries", Category::Shopping, Some(at(18, 30))).unwrap();
    commands.add_task("Review chapter 4", Category::Study, None).unwrap();
    // Names get trimmed on the way in
    commands.add_task("  Morning run  ", Category::Exercise, Some(at(7, 0))).unwrap();

    drain_events(ui);
}

fn misuse_the_commands(commands: &Commands, ui: &mut UiReceiver) {
    println!("\nNow, let's misuse the commands: an empty name, then a deletion with nothing selected.");
    println!("Refusals reach the frontend as popups, just like any other event.");
    pause();

    if commands.add_task("   ", Category::Study, None).is_err() {
        println!("The empty name was refused, as expected.");
    }
    if commands.delete_selected(None).is_err() {
        println!("The deletion was refused, as expected.");
    }

    drain_events(ui);
}

fn complete_and_delete(commands: &Commands, ui: &mut UiReceiver) {
    println!("\nNow, we'll mark the first task as done, and delete the second one.");
    pause();

    commands.mark_selected_done(Some(0)).unwrap();
    let removed = commands.delete_selected(Some(1)).unwrap();
    println!("Removed '{}'.", removed.name());

    drain_events(ui);
}

async fn wait_for_a_reminder(commands: &Commands, ui: &mut UiReceiver) {
    let soon = (Local::now() + Duration::minutes(1)).time();
    println!("\nFinally, let's add a task due at {} (the next minute of the wall clock).", soon.format("%H:%M"));
    pause();

    commands.add_task("Stretch your legs", Category::Exercise, Some(soon)).unwrap();
    println!("Waiting for the scheduler to ring it (this can take up to a minute)...");

    loop {
        match ui.recv().await {
            Some(UiEvent::Alert(message)) => {
                println!("(popup) {}", message);
                break;
            }
            Some(event) => print_event(event),
            None => break,
        }
    }
    // The ring also completes the task, which triggers one last re-draw
    if let Some(event) = ui.recv().await {
        print_event(event);
    }
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn print_event(event: UiEvent) {
    match event {
        UiEvent::ListChanged(rows) => {
            println!("---- The task list changed ----");
            print_rows(&rows);
        }
        UiEvent::Alert(message) => println!("(popup) {}", message),
    }
}

fn drain_events(ui: &mut UiReceiver) {
    while let Ok(event) = ui.try_recv() {
        print_event(event);
    }
}
