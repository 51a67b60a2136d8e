//! # Numeric stack that publishes its changes.
//!
//! [`Stack`] keeps an ordered sequence of `f64` (top = most recently pushed) and
//! a private [`Publisher`] pre-registered with [`STACK_CHANGED`] and
//! [`STACK_ERROR`].
//!
//! ## Event contract
//! ```text
//! push / pop / swap_top (success) ──► mutate ──► raise "StackChanged" (no payload)
//! push_quiet / pop_quiet          ──► mutate ──► (nothing)
//! pop on empty                    ──► raise "StackError" {Empty}           ──► Err(StackError::Empty)
//! swap_top with < 2 elements      ──► raise "StackError" {TooFewArguments} ──► Err(StackError::TooFewArguments)
//! get_elements / size / clear     ──► (nothing)
//! ```
//!
//! The error event is always raised **before** the error is returned, and the
//! sequence is left untouched on failure. Quiet variants only silence the
//! success-path `"StackChanged"`; errors are always raised.
//!
//! ## Cells
//! Values and publisher live in separate `RefCell`s. A mutation takes the
//! publisher first, changes the values under a short borrow, then raises with
//! the value borrow released. Through [`SharedStack`](crate::SharedStack) an
//! observer can therefore read the values during dispatch, while any mutation
//! or registry access from inside dispatch panics before touching anything.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::BTreeSet;

use crate::error::{PublisherError, StackError};
use crate::events::{EventData, Publisher};
use crate::observers::Observer;

use super::{StackBuilder, StackConfig, StackErrorKind, StackEventData};

/// Raised after every successful, non-quiet mutation. Carries no payload.
pub const STACK_CHANGED: &str = "StackChanged";

/// Raised before an underflow error is returned. Carries [`StackEventData`].
pub const STACK_ERROR: &str = "StackError";

const REENTERED: &str = "stack re-entered from an observer during dispatch";

/// A stack of `f64` values that notifies observers of changes and errors.
///
/// ```rust
/// use stackcast::{Stack, StackError};
///
/// let mut stack = Stack::new();
/// stack.push(1.0);
/// stack.push(2.0);
/// assert_eq!(stack.pop(), Ok(2.0));
/// assert_eq!(stack.size(), 1);
/// assert_eq!(stack.pop(), Ok(1.0));
/// assert_eq!(stack.pop(), Err(StackError::Empty));
/// ```
#[derive(Debug)]
pub struct Stack {
    elements: RefCell<Vec<f64>>,
    events: RefCell<Publisher>,
}

impl Stack {
    /// Creates an empty stack with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&StackConfig::default())
    }

    /// Creates an empty stack with the given configuration.
    #[must_use]
    pub fn with_config(cfg: &StackConfig) -> Self {
        let mut events = Publisher::new();
        let registered = events.register_events([STACK_CHANGED, STACK_ERROR]);
        debug_assert!(registered.is_ok());

        let elements = cfg
            .capacity_hint()
            .map(Vec::with_capacity)
            .unwrap_or_default();
        Self {
            elements: RefCell::new(elements),
            events: RefCell::new(events),
        }
    }

    /// Returns a [`StackBuilder`] for attaching observers at construction.
    #[must_use]
    pub fn builder(cfg: StackConfig) -> StackBuilder {
        StackBuilder::new(cfg)
    }

    /// Pushes `value` as the new top and raises [`STACK_CHANGED`].
    pub fn push(&mut self, value: f64) {
        self.push_shared(value, false);
    }

    /// Pushes `value` as the new top without raising [`STACK_CHANGED`].
    pub fn push_quiet(&mut self, value: f64) {
        self.push_shared(value, true);
    }

    /// Removes and returns the top value, raising [`STACK_CHANGED`].
    ///
    /// On an empty stack raises [`STACK_ERROR`] with [`StackErrorKind::Empty`],
    /// then returns [`StackError::Empty`].
    pub fn pop(&mut self) -> Result<f64, StackError> {
        self.pop_shared(false)
    }

    /// Like [`pop`](Self::pop) but without raising [`STACK_CHANGED`] on success.
    ///
    /// The error path still raises [`STACK_ERROR`].
    pub fn pop_quiet(&mut self) -> Result<f64, StackError> {
        self.pop_shared(true)
    }

    /// Exchanges the two topmost values and raises [`STACK_CHANGED`].
    ///
    /// With fewer than two values raises [`STACK_ERROR`] with
    /// [`StackErrorKind::TooFewArguments`], then returns
    /// [`StackError::TooFewArguments`].
    pub fn swap_top(&mut self) -> Result<(), StackError> {
        self.swap_top_shared()
    }

    /// Returns up to `n` values, top first. Raises nothing.
    pub fn get_elements(&self, n: usize) -> Vec<f64> {
        self.elements.borrow().iter().rev().take(n).copied().collect()
    }

    /// Replaces the contents of `out` with up to `n` values, top first.
    pub fn get_elements_into(&self, n: usize, out: &mut Vec<f64>) {
        out.clear();
        out.extend(self.elements.borrow().iter().rev().take(n).copied());
    }

    /// Number of values on the stack.
    #[inline]
    pub fn size(&self) -> usize {
        self.elements.borrow().len()
    }

    /// Returns `true` if the stack holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }

    /// Removes every value. Raises nothing; meant for resets between tests.
    pub fn clear(&mut self) {
        self.elements.get_mut().clear();
    }

    /// Attaches `observer` to [`STACK_CHANGED`] or [`STACK_ERROR`].
    pub fn attach(&mut self, event: &str, observer: Observer) -> Result<(), PublisherError> {
        self.events.get_mut().attach(event, observer)
    }

    /// Detaches the observer named `observer` from `event` and returns it.
    pub fn detach(&mut self, event: &str, observer: &str) -> Result<Observer, PublisherError> {
        self.events.get_mut().detach(event, observer)
    }

    /// Names of the events this stack raises.
    pub fn list_events(&self) -> BTreeSet<String> {
        self.registry().list_events()
    }

    /// Names of the observers attached to `event`.
    pub fn list_event_observers(&self, event: &str) -> Result<BTreeSet<String>, PublisherError> {
        self.registry().list_event_observers(event)
    }

    // ---- Shared-access operations (used by `SharedStack`) ----

    pub(super) fn push_shared(&self, value: f64, quiet: bool) {
        let mut events = self.registry_mut();
        self.elements.borrow_mut().push(value);
        if !quiet {
            Self::raise(&mut events, STACK_CHANGED, None);
        }
    }

    pub(super) fn pop_shared(&self, quiet: bool) -> Result<f64, StackError> {
        let mut events = self.registry_mut();
        let popped = self.elements.borrow_mut().pop();
        let Some(value) = popped else {
            return Err(self.underflow(&mut events, StackErrorKind::Empty));
        };
        if !quiet {
            Self::raise(&mut events, STACK_CHANGED, None);
        }
        Ok(value)
    }

    pub(super) fn swap_top_shared(&self) -> Result<(), StackError> {
        let mut events = self.registry_mut();
        let swapped = {
            let mut elements = self.elements.borrow_mut();
            let len = elements.len();
            if len >= 2 {
                elements.swap(len - 1, len - 2);
            }
            len >= 2
        };
        if !swapped {
            return Err(self.underflow(&mut events, StackErrorKind::TooFewArguments));
        }
        Self::raise(&mut events, STACK_CHANGED, None);
        Ok(())
    }

    pub(super) fn clear_shared(&self) {
        let _events = self.registry_mut();
        self.elements.borrow_mut().clear();
    }

    pub(super) fn attach_shared(&self, event: &str, observer: Observer) -> Result<(), PublisherError> {
        self.registry_mut().attach(event, observer)
    }

    pub(super) fn detach_shared(&self, event: &str, observer: &str) -> Result<Observer, PublisherError> {
        self.registry_mut().detach(event, observer)
    }

    /// Raises [`STACK_ERROR`] for `kind` and returns the error to hand back.
    fn underflow(&self, events: &mut Publisher, kind: StackErrorKind) -> StackError {
        tracing::debug!(?kind, size = self.size(), "stack underflow");
        let data = StackEventData::new(kind);
        Self::raise(events, STACK_ERROR, Some(&data));
        StackError::from(kind)
    }

    fn raise(events: &mut Publisher, event: &str, data: Option<&dyn EventData>) {
        // Both events are registered in `with_config` and never removed.
        let raised = events.raise(event, data);
        debug_assert!(raised.is_ok());
    }

    /// # Panics
    /// Panics while this stack is dispatching.
    fn registry(&self) -> Ref<'_, Publisher> {
        match self.events.try_borrow() {
            Ok(events) => events,
            Err(_) => panic!("{REENTERED}"),
        }
    }

    /// # Panics
    /// Panics while this stack is dispatching.
    fn registry_mut(&self) -> RefMut<'_, Publisher> {
        match self.events.try_borrow_mut() {
            Ok(events) => events,
            Err(_) => panic!("{REENTERED}"),
        }
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}
