//! The machine itself: validated construction and request-driven
//! transitions.

mod error;
pub mod macros;

pub use error::BuildError;

use crate::core::{State, TransitionLog, TransitionRecord};
use crate::snapshot::{Snapshot, SnapshotError, SNAPSHOT_VERSION};
use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

/// A finite state machine over named states.
///
/// The machine holds an ordered list of states, a designated initial
/// and final state, and exactly one current state. Construction
/// validates the whole definition (unique names, resolvable initial and
/// final states, every declared edge target present) and then enters
/// the initial state, firing its enter hook. `request` is the only
/// mutator; there are no implicit transitions.
///
/// The final state is informational: nothing special happens on
/// reaching it, and dropping a machine never fires an exit hook.
///
/// # Example
///
/// ```rust
/// use turnstile::core::State;
/// use turnstile::machine::Fsm;
///
/// let mut light = Fsm::new(
///     "stoplight",
///     vec![
///         State::new("red").to("green"),
///         State::new("green").to("yellow"),
///         State::new("yellow").to("red"),
///     ],
///     "red",
///     "red",
/// )
/// .unwrap();
///
/// assert!(!light.request("yellow"));
/// assert!(light.request("green"));
/// assert_eq!(light.current_state().name(), "green");
/// ```
#[derive(Debug)]
pub struct Fsm {
    name: String,
    states: Vec<State>,
    index: HashMap<String, usize>,
    initial: usize,
    terminal: usize,
    current: usize,
    log: TransitionLog,
}

impl Fsm {
    /// Construct a machine and enter its initial state.
    ///
    /// The definition is validated before anything runs: state names
    /// must be unique, `initial` and `terminal` must name declared
    /// states, and every edge target must name a declared state. On
    /// success the initial state's enter hook has already fired once.
    pub fn new(
        name: impl Into<String>,
        states: Vec<State>,
        initial: &str,
        terminal: &str,
    ) -> Result<Self, BuildError> {
        let name = name.into();

        if states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut index = HashMap::with_capacity(states.len());
        for (i, state) in states.iter().enumerate() {
            if index.insert(state.name().to_string(), i).is_some() {
                return Err(BuildError::DuplicateState(state.name().to_string()));
            }
        }

        for state in &states {
            for target in state.transitions() {
                if !index.contains_key(target) {
                    return Err(BuildError::UndeclaredTarget {
                        from: state.name().to_string(),
                        to: target.clone(),
                    });
                }
            }
        }

        let initial = *index
            .get(initial)
            .ok_or_else(|| BuildError::UnknownInitialState(initial.to_string()))?;
        let terminal = *index
            .get(terminal)
            .ok_or_else(|| BuildError::UnknownFinalState(terminal.to_string()))?;

        let machine = Self {
            name,
            states,
            index,
            initial,
            terminal,
            current: initial,
            log: TransitionLog::new(),
        };

        machine.states[initial].enter();
        tracing::info!(
            machine = %machine.name,
            state = %machine.states[initial].name(),
            "entering state"
        );

        Ok(machine)
    }

    /// The machine's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All states, in declaration order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The current state.
    pub fn current_state(&self) -> &State {
        &self.states[self.current]
    }

    /// The designated initial state.
    pub fn initial_state(&self) -> &State {
        &self.states[self.initial]
    }

    /// The designated final state.
    pub fn final_state(&self) -> &State {
        &self.states[self.terminal]
    }

    /// Whether the current state is the designated final state.
    ///
    /// Purely informational; the machine keeps accepting requests.
    pub fn is_final(&self) -> bool {
        self.current == self.terminal
    }

    /// The log of successful transitions so far.
    pub fn history(&self) -> &TransitionLog {
        &self.log
    }

    /// Attempt a transition to the named state.
    ///
    /// Returns `true` iff the current state declares an edge to
    /// `target`. On success the current state's exit hook fires, then
    /// the target's enter hook, in that order, and the transition is
    /// recorded. On rejection nothing changes and no hooks fire - a
    /// rejected request is a normal outcome, not an error.
    pub fn request(&mut self, target: &str) -> bool {
        if !self.current_state().can_transition_to(target) {
            tracing::info!(
                machine = %self.name,
                from = %self.current_state().name(),
                to = target,
                "no transition exists"
            );
            return false;
        }

        // Every declared edge target was resolved at construction.
        let next = self.index[target];
        let from = self.current;

        tracing::info!(
            machine = %self.name,
            state = %self.states[from].name(),
            "exiting state"
        );
        self.states[from].exit();
        self.states[next].enter();
        tracing::info!(
            machine = %self.name,
            state = %self.states[next].name(),
            "entering state"
        );

        self.log = self.log.record(TransitionRecord {
            from: self.states[from].name().to_string(),
            to: self.states[next].name().to_string(),
            timestamp: Utc::now(),
        });
        self.current = next;

        true
    }

    /// Capture a serializable snapshot of the machine's position.
    ///
    /// Hooks are not captured; a snapshot is names and history only.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            machine: self.name.clone(),
            initial_state: self.states[self.initial].name().to_string(),
            current_state: self.states[self.current].name().to_string(),
            log: self.log.clone(),
        }
    }

    /// Resume from a snapshot taken of this machine.
    ///
    /// Validates that the snapshot belongs to a machine with this name
    /// and that its current state is declared here, then adopts the
    /// recorded position and history. No hooks fire: a resume is
    /// positional, not a transition.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        if snapshot.machine != self.name {
            return Err(SnapshotError::ValidationFailed(format!(
                "snapshot belongs to machine '{}', not '{}'",
                snapshot.machine, self.name
            )));
        }
        let Some(&current) = self.index.get(&snapshot.current_state) else {
            return Err(SnapshotError::ValidationFailed(format!(
                "snapshot state '{}' is not declared by this machine",
                snapshot.current_state
            )));
        };

        self.current = current;
        self.log = snapshot.log.clone();

        tracing::info!(
            machine = %self.name,
            state = %self.states[current].name(),
            "resumed from snapshot"
        );

        Ok(())
    }
}
