//! Event-Driven State Machine
//!
//! This example wires a machine to a dispatcher: external events drive
//! `request` through registered handlers, and the handlers never need to
//! know whether a transition is currently legal.
//!
//! Run with: cargo run --example event_driven

use std::sync::{Arc, Mutex};
use turnstile::dispatch::Dispatcher;
use turnstile::machine::Fsm;
use turnstile::states;

fn main() {
    tracing_subscriber::fmt().init();

    println!("=== Event-Driven State Machine ===\n");

    let door = Fsm::new(
        "door",
        states! {
            "closed" => ["open", "locked"],
            "open" => ["closed"],
            "locked" => ["closed"],
        },
        "closed",
        "closed",
    )
    .expect("door definition is valid");
    let door = Arc::new(Mutex::new(door));

    let mut dispatcher = Dispatcher::new();

    for (event, target) in [
        ("pull-handle", "open"),
        ("push-shut", "closed"),
        ("turn-key", "locked"),
    ] {
        let door = Arc::clone(&door);
        dispatcher.subscribe(event, move || {
            let mut door = door.lock().unwrap();
            let accepted = door.request(target);
            println!(
                "  {} -> request({:?}): {} (now {})",
                event,
                target,
                accepted,
                door.current_state().name()
            );
        });
    }

    // Locking an open door is rejected; everything else goes through.
    for event in ["pull-handle", "turn-key", "push-shut", "turn-key"] {
        dispatcher.dispatch(event);
    }

    let door = door.lock().unwrap();
    println!("\nFinal state: {}", door.current_state().name());
    println!("Path: {:?}", door.history().get_path());
    println!("\n=== Example Complete ===");
}
