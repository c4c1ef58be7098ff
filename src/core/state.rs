//! State definitions for named-state machines.
//!
//! States are runtime values, not types: each one carries a unique name,
//! an ordered list of allowed destination states, and optional enter/exit
//! hooks fired when the state becomes or ceases to be current.

use std::fmt;
use std::sync::Arc;

/// Shared side-effect hook fired on state entry or exit.
///
/// Hooks are stored behind `Arc` so states stay cloneable, and must be
/// `Send + Sync` so a machine can be moved across threads or shared
/// behind a lock.
pub type StateHook = Arc<dyn Fn() + Send + Sync>;

/// A named node in a machine's transition graph.
///
/// A state declares where it may go (its outgoing edges, by name) and
/// optionally what happens when it is entered or left. Edges are
/// declaration-ordered; self-loops are allowed.
///
/// # Example
///
/// ```rust
/// use turnstile::core::State;
///
/// let red = State::new("red")
///     .to("green")
///     .on_enter(|| println!("stop"));
///
/// assert_eq!(red.name(), "red");
/// assert!(red.can_transition_to("green"));
/// assert!(!red.can_transition_to("yellow"));
/// ```
#[derive(Clone)]
pub struct State {
    name: String,
    on_enter: Option<StateHook>,
    on_exit: Option<StateHook>,
    transitions: Vec<String>,
}

impl State {
    /// Create a state with the given name, no hooks and no outgoing edges.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on_enter: None,
            on_exit: None,
            transitions: Vec::new(),
        }
    }

    /// Declare an outgoing edge to the named state.
    ///
    /// Edges keep their declaration order. Declaring the state's own
    /// name creates a self-loop.
    pub fn to(mut self, target: impl Into<String>) -> Self {
        self.transitions.push(target.into());
        self
    }

    /// Set the hook fired when this state becomes current.
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_enter = Some(Arc::new(hook));
        self
    }

    /// Set the hook fired when this state ceases to be current.
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_exit = Some(Arc::new(hook));
        self
    }

    /// The state's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared outgoing edges, in declaration order.
    pub fn transitions(&self) -> &[String] {
        &self.transitions
    }

    /// Whether an edge to `target` is declared.
    pub fn can_transition_to(&self, target: &str) -> bool {
        self.transitions.iter().any(|t| t == target)
    }

    /// Fire the enter hook, if present.
    pub(crate) fn enter(&self) {
        if let Some(hook) = &self.on_enter {
            hook();
        }
    }

    /// Fire the exit hook, if present.
    pub(crate) fn exit(&self) {
        if let Some(hook) = &self.on_exit {
            hook();
        }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("transitions", &self.transitions)
            .field("on_enter", &self.on_enter.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .finish()
    }
}
