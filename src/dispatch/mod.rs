//! Event dispatch for driving machines from named events.
//!
//! The dispatcher holds registration records keyed by event name.
//! Subscribers receive an opaque handle and unregister explicitly; the
//! dispatcher never owns or extends the lifetime of anything beyond the
//! handler closure itself. Higher-level code typically registers a
//! closure that calls `request` on a shared machine.

use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Shared handler closure invoked when a subscribed event fires.
pub type Handler = Arc<dyn Fn() + Send + Sync>;

/// Opaque handle identifying one registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

struct Registration {
    id: SubscriptionId,
    handler: Handler,
    once: bool,
}

/// Registry of event-name keyed handler registrations.
///
/// # Example
///
/// ```rust
/// use turnstile::dispatch::Dispatcher;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let mut dispatcher = Dispatcher::new();
/// let count = Arc::new(AtomicUsize::new(0));
///
/// let seen = Arc::clone(&count);
/// let id = dispatcher.subscribe("tick", move || {
///     seen.fetch_add(1, Ordering::SeqCst);
/// });
///
/// assert_eq!(dispatcher.dispatch("tick"), 1);
/// assert_eq!(count.load(Ordering::SeqCst), 1);
///
/// dispatcher.unsubscribe(id);
/// assert_eq!(dispatcher.dispatch("tick"), 0);
/// ```
#[derive(Default)]
pub struct Dispatcher {
    registrations: HashMap<String, Vec<Registration>>,
}

impl Dispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self {
            registrations: HashMap::new(),
        }
    }

    /// Register a handler for the named event.
    ///
    /// The handler fires on every dispatch of the event until the
    /// returned handle is passed to `unsubscribe`.
    pub fn subscribe<F>(&mut self, event: &str, handler: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.register(event, Arc::new(handler), false)
    }

    /// Register a handler that fires on the next dispatch only.
    pub fn subscribe_once<F>(&mut self, event: &str, handler: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.register(event, Arc::new(handler), true)
    }

    fn register(&mut self, event: &str, handler: Handler, once: bool) -> SubscriptionId {
        let id = SubscriptionId(Uuid::new_v4());
        self.registrations
            .entry(event.to_string())
            .or_default()
            .push(Registration { id, handler, once });
        id
    }

    /// Remove the registration behind a handle.
    ///
    /// Returns whether a registration was actually removed; removing an
    /// already-gone handle is a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let mut removed = false;
        self.registrations.retain(|_, entries| {
            let before = entries.len();
            entries.retain(|r| r.id != id);
            removed |= entries.len() != before;
            !entries.is_empty()
        });
        removed
    }

    /// Whether a handle still has a live registration.
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.registrations
            .values()
            .any(|entries| entries.iter().any(|r| r.id == id))
    }

    /// Number of live registrations for the named event.
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.registrations.get(event).map_or(0, Vec::len)
    }

    /// Fire every handler registered for the named event.
    ///
    /// Handlers run in registration order; one-shot registrations are
    /// removed before their handler runs. Returns the number of
    /// handlers invoked. An event with no registrations is a no-op.
    pub fn dispatch(&mut self, event: &str) -> usize {
        let Some(entries) = self.registrations.get_mut(event) else {
            return 0;
        };
        let handlers: Vec<Handler> = entries.iter().map(|r| Arc::clone(&r.handler)).collect();
        entries.retain(|r| !r.once);
        let now_empty = entries.is_empty();
        if now_empty {
            self.registrations.remove(event);
        }

        tracing::debug!(event, handlers = handlers.len(), "dispatching event");
        for handler in &handlers {
            handler();
        }
        handlers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn counting_handler(count: &Arc<AtomicUsize>) -> impl Fn() + Send + Sync + 'static {
        let count = Arc::clone(count);
        move || {
            count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn subscribe_and_dispatch_fires_handler() {
        let mut dispatcher = Dispatcher::new();
        let count = Arc::new(AtomicUsize::new(0));

        dispatcher.subscribe("tick", counting_handler(&count));

        assert_eq!(dispatcher.dispatch("tick"), 1);
        assert_eq!(dispatcher.dispatch("tick"), 1);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dispatch_unknown_event_is_a_no_op() {
        let mut dispatcher = Dispatcher::new();

        assert_eq!(dispatcher.dispatch("nothing"), 0);
    }

    #[test]
    fn handlers_fire_in_registration_order() {
        let mut dispatcher = Dispatcher::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for label in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            dispatcher.subscribe("tick", move || order.lock().unwrap().push(label));
        }

        dispatcher.dispatch("tick");

        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn once_registration_fires_exactly_once() {
        let mut dispatcher = Dispatcher::new();
        let count = Arc::new(AtomicUsize::new(0));

        let id = dispatcher.subscribe_once("tick", counting_handler(&count));

        assert_eq!(dispatcher.dispatch("tick"), 1);
        assert_eq!(dispatcher.dispatch("tick"), 0);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!dispatcher.is_subscribed(id));
    }

    #[test]
    fn unsubscribe_removes_registration() {
        let mut dispatcher = Dispatcher::new();
        let count = Arc::new(AtomicUsize::new(0));

        let id = dispatcher.subscribe("tick", counting_handler(&count));

        assert!(dispatcher.is_subscribed(id));
        assert!(dispatcher.unsubscribe(id));
        assert!(!dispatcher.is_subscribed(id));
        assert!(!dispatcher.unsubscribe(id));

        assert_eq!(dispatcher.dispatch("tick"), 0);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unsubscribe_leaves_other_registrations_alone() {
        let mut dispatcher = Dispatcher::new();
        let count = Arc::new(AtomicUsize::new(0));

        let first = dispatcher.subscribe("tick", counting_handler(&count));
        let second = dispatcher.subscribe("tick", counting_handler(&count));

        dispatcher.unsubscribe(first);

        assert!(dispatcher.is_subscribed(second));
        assert_eq!(dispatcher.subscriber_count("tick"), 1);
        assert_eq!(dispatcher.dispatch("tick"), 1);
    }

    #[test]
    fn subscriber_count_tracks_event_registrations() {
        let mut dispatcher = Dispatcher::new();
        let count = Arc::new(AtomicUsize::new(0));

        assert_eq!(dispatcher.subscriber_count("tick"), 0);

        dispatcher.subscribe("tick", counting_handler(&count));
        dispatcher.subscribe("tock", counting_handler(&count));

        assert_eq!(dispatcher.subscriber_count("tick"), 1);
        assert_eq!(dispatcher.subscriber_count("tock"), 1);
    }
}
