//! Turnstile: a named-state finite state machine
//!
//! Turnstile models machines whose states are runtime values: each state
//! has a unique name, optional enter/exit hooks, and an explicit list of
//! allowed destinations. The whole definition is validated at
//! construction, so a built machine can never be asked to resolve a
//! state it does not know.
//!
//! # Core Concepts
//!
//! - **State**: a named node with hooks and declared outgoing edges
//! - **Fsm**: validated construction, `request` as the only mutator
//! - **History**: immutable tracking of transitions over time
//! - **Dispatch**: event-name keyed registrations for driving `request`
//!   from external events
//!
//! # Example
//!
//! ```rust
//! use turnstile::core::State;
//! use turnstile::machine::Fsm;
//!
//! let mut light = Fsm::new(
//!     "stoplight",
//!     vec![
//!         State::new("red").to("green").on_enter(|| println!("stop")),
//!         State::new("green").to("yellow").on_enter(|| println!("go")),
//!         State::new("yellow").to("red"),
//!     ],
//!     "red",
//!     "red",
//! )
//! .unwrap();
//!
//! assert!(light.request("green"));
//! assert!(!light.request("red")); // green only goes to yellow
//! assert_eq!(light.current_state().name(), "green");
//! ```

pub mod core;
pub mod dispatch;
pub mod machine;
pub mod snapshot;

// Re-export commonly used types
pub use core::{State, StateHook, TransitionLog, TransitionRecord};
pub use dispatch::{Dispatcher, SubscriptionId};
pub use machine::{BuildError, Fsm};
pub use snapshot::{Snapshot, SnapshotError};
