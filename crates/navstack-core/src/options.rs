//! Modifiers for `navigate_*` calls.

use crate::identity::DestinationKind;

/// Pop the stack back to the topmost entry of `kind` before pushing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PopUpTo<K> {
    /// Kind to search for, nearest to the top first
    pub kind: K,
    /// Also remove the matched entry
    pub inclusive: bool,
}

impl<K: DestinationKind> PopUpTo<K> {
    /// Keep the matched entry.
    pub fn new(kind: K) -> Self {
        Self {
            kind,
            inclusive: false,
        }
    }

    /// Remove the matched entry as well.
    pub fn inclusive(kind: K) -> Self {
        Self {
            kind,
            inclusive: true,
        }
    }
}

/// Options for a single-destination navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NavOptions<K> {
    /// Skip the push if the top already has the same kind
    pub launch_single_top: bool,
    /// Pop before pushing
    pub pop_up_to: Option<PopUpTo<K>>,
}

impl<K> Default for NavOptions<K> {
    fn default() -> Self {
        Self {
            launch_single_top: false,
            pop_up_to: None,
        }
    }
}

impl<K: DestinationKind> NavOptions<K> {
    /// Plain push.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `launch_single_top`.
    pub fn single_top(mut self, launch_single_top: bool) -> Self {
        self.launch_single_top = launch_single_top;
        self
    }

    /// Pop up to `kind` (keeping it) first.
    pub fn pop_up_to(mut self, kind: K) -> Self {
        self.pop_up_to = Some(PopUpTo::new(kind));
        self
    }

    /// Pop up to and including `kind` first.
    pub fn pop_up_to_inclusive(mut self, kind: K) -> Self {
        self.pop_up_to = Some(PopUpTo::inclusive(kind));
        self
    }
}
