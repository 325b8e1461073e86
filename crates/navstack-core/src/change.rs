//! Change records delivered to observers.

use crate::identity::{Destination, DestinationKind};
use std::fmt;

/// Net effect of one controller call on the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavOperation<K> {
    /// One destination appended
    Push {
        /// Kind of the new top
        kind: K,
    },
    /// Several destinations appended
    PushAll {
        /// Number appended
        count: usize,
    },
    /// Entries removed from the tail, stack not emptied by a clear
    Pop {
        /// Number removed
        count: usize,
    },
    /// Stack cleared back to root
    Clear {
        /// Number removed
        removed: usize,
    },
    /// Entries removed and then appended in one call
    Composite {
        /// Number removed
        popped: usize,
        /// Number appended
        pushed: usize,
    },
    /// Nothing changed
    Unchanged,
}

impl<K: DestinationKind> NavOperation<K> {
    /// Check if the stack was modified
    pub fn is_mutation(&self) -> bool {
        !matches!(self, NavOperation::Unchanged)
    }
}

impl<K: DestinationKind> fmt::Display for NavOperation<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavOperation::Push { kind } => write!(f, "push {kind}"),
            NavOperation::PushAll { count } => write!(f, "push {count}"),
            NavOperation::Pop { count } => write!(f, "pop {count}"),
            NavOperation::Clear { removed } => write!(f, "clear {removed}"),
            NavOperation::Composite { popped, pushed } => {
                write!(f, "pop {popped}, push {pushed}")
            }
            NavOperation::Unchanged => f.write_str("unchanged"),
        }
    }
}

/// Tally of removals and appends made while applying one call.
#[derive(Debug)]
pub(crate) struct Edit<K> {
    pub(crate) popped: usize,
    pub(crate) pushed: usize,
    pub(crate) cleared: bool,
    pub(crate) last_pushed: Option<K>,
}

impl<K: DestinationKind> Edit<K> {
    pub(crate) fn new() -> Self {
        Self {
            popped: 0,
            pushed: 0,
            cleared: false,
            last_pushed: None,
        }
    }

    pub(crate) fn operation(&self) -> NavOperation<K> {
        match (self.popped, self.pushed, self.last_pushed) {
            (0, 0, _) => NavOperation::Unchanged,
            (0, 1, Some(kind)) => NavOperation::Push { kind },
            (0, count, _) => NavOperation::PushAll { count },
            (removed, 0, _) if self.cleared => NavOperation::Clear { removed },
            (count, 0, _) => NavOperation::Pop { count },
            (popped, pushed, _) => NavOperation::Composite { popped, pushed },
        }
    }
}

/// A stack change, as seen by observers.
#[derive(Clone, Debug)]
pub struct StackChange<D: Destination> {
    /// What happened
    pub operation: NavOperation<D::Kind>,
    /// Stack length before the call
    pub before: usize,
    /// Stack contents after the call, head to tail
    pub stack: Vec<D>,
    /// Observable version after the call
    pub version: u64,
}
