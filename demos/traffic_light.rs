//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic transitions (states repeat)
//! - Enter hooks as the per-state side effect
//! - Rejected requests as a normal, recoverable outcome
//!
//! Run with: cargo run --example traffic_light

use turnstile::core::State;
use turnstile::machine::Fsm;

fn main() {
    tracing_subscriber::fmt().init();

    println!("=== Traffic Light State Machine ===\n");

    let mut light = Fsm::new(
        "stoplight",
        vec![
            State::new("red")
                .to("green")
                .on_enter(|| println!("  red: stop")),
            State::new("green")
                .to("yellow")
                .on_enter(|| println!("  green: go")),
            State::new("yellow")
                .to("red")
                .on_enter(|| println!("  yellow: caution")),
        ],
        "red",
        "red",
    )
    .expect("stoplight definition is valid");

    println!("Initial state: {}\n", light.current_state().name());

    // A full cycle: red -> green -> yellow -> red
    for target in ["green", "yellow", "red"] {
        assert!(light.request(target));
    }

    // Skipping a phase is rejected, not an error.
    let skipped = light.request("yellow");
    println!(
        "\nrequest(\"yellow\") from {}: {}",
        light.current_state().name(),
        skipped
    );

    println!("\nPath so far: {:?}", light.history().get_path());
    println!("\n=== Example Complete ===");
}
