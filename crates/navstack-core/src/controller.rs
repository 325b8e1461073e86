//! # Navigation Stack Controller
//!
//! Owns the ordered stack of destinations and applies every navigation rule.
//!
//! ## Rules
//!
//! - Kinds, not values, decide identity (see [`crate::identity`]).
//! - Root is never stored. Navigating to root, or popping up to root, clears
//!   the stack; `current_destination()` synthesizes root when empty.
//! - `pop_up_to` searches from the tail towards the head, so the entry
//!   nearest the top wins when a kind repeats.
//! - Batch pushes never de-duplicate.
//! - Every operation is total. Empty stacks and missing targets are no-ops.
//!
//! ## Notification
//!
//! Each public call that changes the stack publishes one new snapshot to the
//! observable cell and then notifies observers once, synchronously, before
//! returning. Calls that change nothing notify nobody unless
//! [`NavConfig::notify_on_noop`] is set.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::change::{Edit, StackChange};
use crate::config::NavConfig;
use crate::identity::{same_kind, Destination, DestinationKind};
use crate::observer::{ObserverId, ObserverRegistry, StackObserver};
use crate::options::{NavOptions, PopUpTo};
use crate::reactive::{Observable, Subscription};

/// A navigation request, for callers that queue or replay navigation.
#[derive(Clone, Debug)]
pub enum NavAction<D: Destination> {
    /// Navigate to a single destination
    Navigate {
        /// Target destination
        destination: D,
        /// Single-top and pop-up-to modifiers
        options: NavOptions<D::Kind>,
    },
    /// Append a list of destinations, optionally popping first
    NavigateAll {
        /// Destinations in push order
        destinations: Vec<D>,
        /// Pop before pushing
        pop_up_to: Option<PopUpTo<D::Kind>>,
    },
    /// Remove the top entry
    PopBack,
    /// Pop back to the topmost entry of a kind
    PopUpTo(PopUpTo<D::Kind>),
    /// Clear the stack
    PopToRoot,
}

/// Single-active-stack navigation controller.
///
/// Construct one per navigation scope and pass it to whoever directs
/// navigation. Mutations take `&mut self`; readers elsewhere use
/// [`observe`](Self::observe) or [`subscribe`](Self::subscribe).
pub struct NavController<D: Destination> {
    stack: Vec<D>,
    published: Observable<Vec<D>>,
    observers: ObserverRegistry<D>,
    config: NavConfig,
}

impl<D: Destination> Default for NavController<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Destination> NavController<D> {
    /// Create a controller with an empty stack and default configuration.
    pub fn new() -> Self {
        Self::with_config(NavConfig::default())
    }

    /// Create a controller with an empty stack.
    pub fn with_config(config: NavConfig) -> Self {
        Self {
            stack: Vec::new(),
            published: Observable::new(Vec::new()),
            observers: ObserverRegistry::new(),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Push `destination`. Root clears the stack instead.
    pub fn navigate_to(&mut self, destination: D) {
        self.navigate_with(destination, NavOptions::default());
    }

    /// Push `destination` unless the top already has its kind.
    pub fn navigate_to_single_top(&mut self, destination: D) {
        self.navigate_with(destination, NavOptions::default().single_top(true));
    }

    /// Push `destination` with modifiers.
    ///
    /// Root clears the stack and ignores `options`. Otherwise the pop-up-to
    /// step runs first and the single-top check is made against the
    /// resulting top.
    pub fn navigate_with(&mut self, destination: D, options: NavOptions<D::Kind>) {
        let before = self.stack.len();
        let mut edit = Edit::new();

        if destination.is_root() {
            clear(&mut self.stack, &mut edit);
        } else {
            if let Some(target) = options.pop_up_to {
                pop_up_to(&mut self.stack, target, &mut edit);
            }
            push(
                &mut self.stack,
                destination,
                options.launch_single_top,
                &mut edit,
            );
        }

        self.commit(before, &edit);
    }

    /// Append every destination in order, optionally popping first.
    ///
    /// No single-top check is made. A root element clears the stack at that
    /// point and appending continues with the remaining elements.
    pub fn navigate_to_all<I>(
        &mut self,
        destinations: I,
        pop_up_to_target: Option<PopUpTo<D::Kind>>,
    ) where
        I: IntoIterator<Item = D>,
    {
        let before = self.stack.len();
        let mut edit = Edit::new();

        if let Some(target) = pop_up_to_target {
            pop_up_to(&mut self.stack, target, &mut edit);
        }
        for destination in destinations {
            if destination.is_root() {
                clear(&mut self.stack, &mut edit);
            } else {
                push(&mut self.stack, destination, false, &mut edit);
            }
        }

        self.commit(before, &edit);
    }

    /// Remove the top entry, if any.
    pub fn pop_back_stack(&mut self) {
        let before = self.stack.len();
        let mut edit = Edit::new();

        if self.stack.pop().is_some() {
            edit.popped = 1;
        }

        self.commit(before, &edit);
    }

    /// Pop back to the topmost entry of `kind`.
    ///
    /// The match is kept unless `inclusive`. Root clears the stack and
    /// ignores `inclusive`; a kind not on the stack is a no-op.
    pub fn pop_up_to(&mut self, kind: D::Kind, inclusive: bool) {
        let before = self.stack.len();
        let mut edit = Edit::new();

        pop_up_to(&mut self.stack, PopUpTo { kind, inclusive }, &mut edit);

        self.commit(before, &edit);
    }

    /// Empty the stack.
    pub fn pop_up_to_root(&mut self) {
        let before = self.stack.len();
        let mut edit = Edit::new();

        clear(&mut self.stack, &mut edit);

        self.commit(before, &edit);
    }

    /// Apply a queued [`NavAction`].
    pub fn apply(&mut self, action: NavAction<D>) {
        match action {
            NavAction::Navigate {
                destination,
                options,
            } => self.navigate_with(destination, options),
            NavAction::NavigateAll {
                destinations,
                pop_up_to,
            } => self.navigate_to_all(destinations, pop_up_to),
            NavAction::PopBack => self.pop_back_stack(),
            NavAction::PopUpTo(target) => self.pop_up_to(target.kind, target.inclusive),
            NavAction::PopToRoot => self.pop_up_to_root(),
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// The visible destination, or a synthesized root when empty.
    pub fn current_destination(&self) -> D {
        self.stack.last().cloned().unwrap_or_else(D::root)
    }

    /// Kind of the visible destination
    pub fn current_kind(&self) -> D::Kind {
        self.stack.last().map_or(D::Kind::ROOT, |top| top.kind())
    }

    /// Stack contents, head to tail
    pub fn stack(&self) -> &[D] {
        &self.stack
    }

    /// Kinds on the stack, head to tail
    pub fn kinds(&self) -> Vec<D::Kind> {
        self.stack.iter().map(|entry| entry.kind()).collect()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Check if the stack is empty (root is showing)
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Check if `pop_back_stack` would remove anything
    pub fn can_go_back(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Human-readable trace: `1:A > 2:B > 3:C`.
    ///
    /// Diagnostic only. The empty stack describes as the empty string.
    pub fn describe(&self) -> String {
        self.stack
            .iter()
            .enumerate()
            .map(|(index, destination)| format!("{}:{}", index + 1, destination.kind()))
            .collect::<Vec<_>>()
            .join(&self.config.separator)
    }

    // ------------------------------------------------------------------
    // Observation
    // ------------------------------------------------------------------

    /// Read handle on the published stack.
    pub fn observe(&self) -> Observable<Vec<D>> {
        self.published.clone()
    }

    /// Subscribe to stack snapshots published after this call.
    pub fn subscribe(&self) -> Subscription<Vec<D>> {
        self.published.subscribe()
    }

    /// Version of the published stack. Bumped once per effective call.
    pub fn version(&self) -> u64 {
        self.published.version()
    }

    /// Register a synchronous observer.
    pub fn add_observer(&mut self, observer: Arc<dyn StackObserver<D>>) -> ObserverId {
        self.observers.register(observer)
    }

    /// Unregister an observer. Returns `false` if it was not registered.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }

    fn commit(&mut self, before: usize, edit: &Edit<D::Kind>) {
        let operation = edit.operation();

        let version = if operation.is_mutation() {
            let version = self.published.set(self.stack.clone());
            if self.config.trace_transitions {
                debug!(
                    %operation,
                    before,
                    after = self.stack.len(),
                    version,
                    stack = %self.describe(),
                    "navigation stack changed"
                );
            }
            version
        } else {
            trace!(depth = before, "navigation call left stack unchanged");
            if !self.config.notify_on_noop {
                return;
            }
            self.published.version()
        };

        if self.observers.is_empty() {
            return;
        }
        let change = StackChange {
            operation,
            before,
            stack: self.stack.clone(),
            version,
        };
        self.observers.notify(&change);
    }
}

impl<D: Destination> fmt::Debug for NavController<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavController")
            .field("stack", &self.stack)
            .field("version", &self.published.version())
            .field("observers", &self.observers.len())
            .field("config", &self.config)
            .finish()
    }
}

fn clear<D: Destination>(stack: &mut Vec<D>, edit: &mut Edit<D::Kind>) {
    // Entries appended earlier in this call sit on top; dropping them undoes
    // the push rather than popping anything that was there before.
    let fresh = edit.pushed.min(stack.len());
    edit.pushed -= fresh;
    if edit.pushed == 0 {
        edit.last_pushed = None;
    }
    let removed = stack.len() - fresh;
    edit.popped += removed;
    if removed > 0 {
        edit.cleared = true;
    }
    stack.clear();
}

fn pop_up_to<D: Destination>(
    stack: &mut Vec<D>,
    target: PopUpTo<D::Kind>,
    edit: &mut Edit<D::Kind>,
) {
    if target.kind.is_root() {
        clear(stack, edit);
        return;
    }
    // Nearest to the top wins.
    let Some(index) = stack.iter().rposition(|entry| entry.kind() == target.kind) else {
        return;
    };
    let keep = if target.inclusive { index } else { index + 1 };
    edit.popped += stack.len() - keep;
    stack.truncate(keep);
}

fn push<D: Destination>(
    stack: &mut Vec<D>,
    destination: D,
    single_top: bool,
    edit: &mut Edit<D::Kind>,
) {
    if single_top && stack.last().is_some_and(|top| same_kind(top, &destination)) {
        return;
    }
    edit.pushed += 1;
    edit.last_pushed = Some(destination.kind());
    stack.push(destination);
}
