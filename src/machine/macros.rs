//! Macros for ergonomic machine construction.

/// Expand a name => targets table into a `Vec` of states.
///
/// Useful for machines whose states need no hooks; chain `on_enter` /
/// `on_exit` onto individual `State` values when they do.
///
/// # Example
///
/// ```rust
/// use turnstile::states;
/// use turnstile::machine::Fsm;
///
/// let machine = Fsm::new(
///     "stoplight",
///     states! {
///         "red" => ["green"],
///         "green" => ["yellow"],
///         "yellow" => ["red"],
///     },
///     "red",
///     "red",
/// )
/// .unwrap();
///
/// assert_eq!(machine.current_state().name(), "red");
/// ```
#[macro_export]
macro_rules! states {
    (
        $( $name:literal => [ $( $target:literal ),* $(,)? ] ),* $(,)?
    ) => {
        vec![
            $(
                $crate::core::State::new($name) $( .to($target) )*
            ),*
        ]
    };
}

#[cfg(test)]
mod tests {
    use crate::machine::Fsm;

    #[test]
    fn states_macro_builds_edge_table() {
        let states = states! {
            "red" => ["green"],
            "green" => ["yellow"],
            "yellow" => ["red"],
        };

        assert_eq!(states.len(), 3);
        assert_eq!(states[0].name(), "red");
        assert!(states[0].can_transition_to("green"));
        assert!(!states[0].can_transition_to("yellow"));
    }

    #[test]
    fn states_macro_allows_empty_target_lists() {
        let states = states! {
            "only" => [],
        };

        assert_eq!(states.len(), 1);
        assert!(states[0].transitions().is_empty());
    }

    #[test]
    fn states_macro_feeds_machine_construction() {
        let machine = Fsm::new(
            "stoplight",
            states! {
                "red" => ["green"],
                "green" => ["yellow"],
                "yellow" => ["red"],
            },
            "red",
            "red",
        )
        .unwrap();

        assert_eq!(machine.states().len(), 3);
    }
}
