//! # Stack Observers
//!
//! Callback-based change notification. Observers are called synchronously,
//! in registration order, after the controller has applied a change and
//! published the new snapshot.

use std::fmt;
use std::sync::Arc;

use crate::change::StackChange;
use crate::identity::Destination;

/// Receives stack changes from a controller.
pub trait StackObserver<D: Destination>: Send + Sync {
    /// Called once per call that changed the stack.
    fn on_stack_changed(&self, change: &StackChange<D>);
}

impl<D, F> StackObserver<D> for F
where
    D: Destination,
    F: Fn(&StackChange<D>) + Send + Sync,
{
    fn on_stack_changed(&self, change: &StackChange<D>) {
        self(change);
    }
}

/// Handle returned by registration, used to unregister.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer-{}", self.0)
    }
}

/// Ordered set of observers.
pub struct ObserverRegistry<D: Destination> {
    observers: Vec<(ObserverId, Arc<dyn StackObserver<D>>)>,
    next_id: u64,
}

impl<D: Destination> Default for ObserverRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Destination> ObserverRegistry<D> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register an observer. Ids are never reused within a registry.
    pub fn register(&mut self, observer: Arc<dyn StackObserver<D>>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer. Returns `false` if the id was not registered.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Number of registered observers
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if no observers are registered
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver `change` to every observer.
    pub fn notify(&self, change: &StackChange<D>) {
        for (_, observer) in &self.observers {
            observer.on_stack_changed(change);
        }
    }
}

impl<D: Destination> fmt::Debug for ObserverRegistry<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
