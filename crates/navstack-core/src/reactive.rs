//! Observable values with poll-based subscriptions
//!
//! The controller publishes every new stack snapshot into an [`Observable`].
//! Views hold a clone (a read handle sharing the same cell) or a
//! [`Subscription`] and re-render when it reports a change.
//!
//! Subscriptions are version-based, not queue-based: several writes between
//! two polls coalesce into one observed change carrying the latest value.

use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

struct ObservableInner<T> {
    value: RwLock<T>,
    /// Incremented on each `set`.
    version: AtomicU64,
}

/// A shared value that can be observed for changes.
///
/// Cloning an `Observable` yields another handle to the same cell.
#[derive(Clone)]
pub struct Observable<T> {
    inner: Arc<ObservableInner<T>>,
}

impl<T: Clone + Send + Sync + 'static> Observable<T> {
    /// Create a new observable with the given initial value (version 0).
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(ObservableInner {
                value: RwLock::new(value),
                version: AtomicU64::new(0),
            }),
        }
    }

    /// Clone out the current value.
    pub fn get(&self) -> T {
        self.inner.value.read().clone()
    }

    /// Read the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.read())
    }

    /// Current version number.
    pub fn version(&self) -> u64 {
        self.inner.version.load(Ordering::Acquire)
    }

    /// Replace the value and bump the version. Returns the new version.
    pub fn set(&self, value: T) -> u64 {
        *self.inner.value.write() = value;
        self.inner.version.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Subscribe to changes made after this call.
    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            source: self.inner.clone(),
            last_version: self.version(),
        }
    }
}

impl<T: Clone + Send + Sync + Default + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + Send + Sync + fmt::Debug + 'static> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.get())
            .field("version", &self.version())
            .finish()
    }
}

/// Poll-based subscription to an [`Observable`].
pub struct Subscription<T> {
    source: Arc<ObservableInner<T>>,
    last_version: u64,
}

impl<T: Clone + Send + Sync + 'static> Subscription<T> {
    /// Returns `Some(latest)` if the source changed since the last poll.
    pub fn poll(&mut self) -> Option<T> {
        let current = self.source.version.load(Ordering::Acquire);
        if current > self.last_version {
            self.last_version = current;
            Some(self.source.value.read().clone())
        } else {
            None
        }
    }

    /// Current value regardless of whether it changed.
    pub fn get(&self) -> T {
        self.source.value.read().clone()
    }
}
