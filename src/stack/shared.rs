//! # Thread-safe stack handle and the process-wide instance.
//!
//! [`Stack`] itself is unsynchronized. [`SharedStack`] is a cloneable handle
//! that serializes every operation, value sequence and observer registries
//! alike, behind one `parking_lot::ReentrantMutex`.
//!
//! ## Rules
//! - All clones of a handle refer to the same stack.
//! - Observers run on the calling thread while the lock is held.
//! - An observer may read the stack through any clone during dispatch
//!   (`size`, `is_empty`, `get_elements`); it sees the state the event reports.
//! - An observer that mutates the stack, or touches its observer registries,
//!   through the same handle during dispatch panics. Re-entrant mutation of a
//!   stack from its own notification is a bug.
//!
//! ## Process-wide instance
//! [`instance`] lazily creates one `SharedStack` on first access and keeps it
//! until the process exits. Prefer passing an explicit handle where possible;
//! the global exists for callers that cannot thread one through.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::ReentrantMutex;

use crate::error::{PublisherError, StackError};
use crate::observers::Observer;

use super::Stack;

/// Cloneable, thread-safe handle to a [`Stack`].
///
/// ```rust
/// use stackcast::{SharedStack, Stack};
///
/// let shared = SharedStack::new(Stack::new());
/// let other = shared.clone();
///
/// std::thread::spawn(move || other.push(3.0)).join().unwrap();
/// assert_eq!(shared.pop(), Ok(3.0));
/// ```
#[derive(Clone)]
pub struct SharedStack {
    inner: Arc<ReentrantMutex<Stack>>,
}

impl SharedStack {
    /// Wraps `stack` into a shared handle.
    #[must_use]
    pub fn new(stack: Stack) -> Self {
        Self {
            inner: Arc::new(ReentrantMutex::new(stack)),
        }
    }

    fn locked<R>(&self, f: impl FnOnce(&Stack) -> R) -> R {
        let guard = self.inner.lock();
        f(&*guard)
    }

    /// See [`Stack::push`].
    ///
    /// # Panics
    /// Panics if called from an observer while this stack is dispatching.
    pub fn push(&self, value: f64) {
        self.locked(|s| s.push_shared(value, false));
    }

    /// See [`Stack::push_quiet`].
    pub fn push_quiet(&self, value: f64) {
        self.locked(|s| s.push_shared(value, true));
    }

    /// See [`Stack::pop`].
    pub fn pop(&self) -> Result<f64, StackError> {
        self.locked(|s| s.pop_shared(false))
    }

    /// See [`Stack::pop_quiet`].
    pub fn pop_quiet(&self) -> Result<f64, StackError> {
        self.locked(|s| s.pop_shared(true))
    }

    /// See [`Stack::swap_top`].
    pub fn swap_top(&self) -> Result<(), StackError> {
        self.locked(Stack::swap_top_shared)
    }

    /// See [`Stack::get_elements`]. Safe to call from an observer.
    pub fn get_elements(&self, n: usize) -> Vec<f64> {
        self.locked(|s| s.get_elements(n))
    }

    /// See [`Stack::get_elements_into`]. Safe to call from an observer.
    pub fn get_elements_into(&self, n: usize, out: &mut Vec<f64>) {
        self.locked(|s| s.get_elements_into(n, out));
    }

    /// See [`Stack::size`]. Safe to call from an observer.
    pub fn size(&self) -> usize {
        self.locked(Stack::size)
    }

    /// See [`Stack::is_empty`]. Safe to call from an observer.
    pub fn is_empty(&self) -> bool {
        self.locked(Stack::is_empty)
    }

    /// See [`Stack::clear`].
    pub fn clear(&self) {
        self.locked(Stack::clear_shared);
    }

    /// See [`Stack::attach`].
    pub fn attach(&self, event: &str, observer: Observer) -> Result<(), PublisherError> {
        self.locked(|s| s.attach_shared(event, observer))
    }

    /// See [`Stack::detach`].
    pub fn detach(&self, event: &str, observer: &str) -> Result<Observer, PublisherError> {
        self.locked(|s| s.detach_shared(event, observer))
    }

    /// See [`Stack::list_events`].
    pub fn list_events(&self) -> BTreeSet<String> {
        self.locked(Stack::list_events)
    }

    /// See [`Stack::list_event_observers`].
    pub fn list_event_observers(&self, event: &str) -> Result<BTreeSet<String>, PublisherError> {
        self.locked(|s| s.list_event_observers(event))
    }
}

impl fmt::Debug for SharedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.lock();
        f.debug_tuple("SharedStack").field(&*guard).finish()
    }
}

/// The process-wide stack, created with the default configuration on first access.
///
/// Never torn down before exit; call [`SharedStack::clear`] to reset values
/// (attached observers stay attached).
pub fn instance() -> &'static SharedStack {
    static INSTANCE: OnceLock<SharedStack> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        tracing::debug!("creating process-wide stack");
        SharedStack::new(Stack::new())
    })
}
