//! Observer registry for state change notification.
//!
//! Stores hold their state explicitly and call `notify` after every
//! mutation. Presentation code subscribes callbacks and re-reads whatever
//! derived views it needs; there is no implicit dependency tracking.
//!
//! ## Usage
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use deck_keeper::core::Observers;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//!
//! let mut observers: Observers<u32> = Observers::new();
//! let id = observers.subscribe(move |event| sink.borrow_mut().push(*event));
//!
//! observers.notify(&7);
//! observers.unsubscribe(id);
//! observers.notify(&8);
//!
//! assert_eq!(*seen.borrow(), vec![7]);
//! ```

use std::fmt;

/// Handle returned by `Observers::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u32);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

type Callback<E> = Box<dyn FnMut(&E)>;

/// Registered callbacks for one event type.
///
/// Callbacks run in subscription order.
pub struct Observers<E> {
    callbacks: Vec<(ObserverId, Callback<E>)>,
    next_id: u32,
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self {
            callbacks: Vec::new(),
            next_id: 0,
        }
    }
}

impl<E> fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}

impl<E> Observers<E> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback.
    pub fn subscribe(&mut self, callback: impl FnMut(&E) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(cid, _)| *cid != id);
        self.callbacks.len() != before
    }

    /// Deliver an event to every callback.
    pub fn notify(&mut self, event: &E) {
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Check if no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}
