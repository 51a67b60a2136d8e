//! # Observer: named notification sinks
//!
//! An [`Observer`] is what a [`Publisher`](crate::Publisher) stores and calls.
//! It pairs an immutable name with a handler implementing [`Notify`]; the
//! publisher only ever sees the `Observer` wrapper, never the concrete
//! subscriber type behind it.
//!
//! ## Ownership
//! ```text
//! Observer::new(name, handler)
//!        │ attach(event, observer)      (moved in)
//!        ▼
//!   Publisher ── raise(event) ──► observer.notify(data) ──► handler.on_notify(data)
//!        │ detach(event, name)          (moved out)
//!        ▼
//!   caller owns it again ──► into_handler() / handler::<T>()
//! ```
//!
//! ## Example: custom handler
//! ```rust
//! use stackcast::{EventData, Notify, Observer};
//!
//! #[derive(Default)]
//! struct Counter { hits: usize }
//!
//! impl Notify for Counter {
//!     fn on_notify(&mut self, _data: Option<&dyn EventData>) {
//!         self.hits += 1;
//!     }
//! }
//!
//! let mut obs = Observer::new("counter", Counter::default());
//! obs.notify(None);
//! obs.notify(None);
//! assert_eq!(obs.handler::<Counter>().map(|c| c.hits), Some(2));
//! ```

use std::fmt;

use crate::events::{AsAny, EventData};

/// Handler side of an [`Observer`].
///
/// Called synchronously from within the publisher's dispatch pass.
///
/// ### Implementation requirements
/// - Do not call back into the publisher that is notifying you (attach/detach/raise);
///   re-entrant mutation during dispatch is not supported.
/// - Handle errors internally; a panic unwinds through the publisher's caller.
pub trait Notify: AsAny + Send {
    /// Processes one notification. `data` is `None` for events without a payload.
    fn on_notify(&mut self, data: Option<&dyn EventData>);
}

/// Adapter turning a closure into a [`Notify`] handler. See [`Observer::from_fn`].
pub struct FnNotify<F>(F);

impl<F> Notify for FnNotify<F>
where
    F: FnMut(Option<&dyn EventData>) + Send + 'static,
{
    #[inline]
    fn on_notify(&mut self, data: Option<&dyn EventData>) {
        (self.0)(data)
    }
}

/// A named notification sink.
///
/// The name identifies the observer within one event's observer set and
/// cannot change after construction.
pub struct Observer {
    name: String,
    handler: Box<dyn Notify>,
}

impl Observer {
    /// Creates an observer that forwards notifications to `handler`.
    pub fn new(name: impl Into<String>, handler: impl Notify) -> Self {
        Self {
            name: name.into(),
            handler: Box::new(handler),
        }
    }

    /// Creates an observer from a closure.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use stackcast::Observer;
    ///
    /// let seen = Arc::new(AtomicUsize::new(0));
    /// let s = Arc::clone(&seen);
    /// let mut obs = Observer::from_fn("seen", move |_| {
    ///     s.fetch_add(1, Ordering::SeqCst);
    /// });
    /// obs.notify(None);
    /// assert_eq!(seen.load(Ordering::SeqCst), 1);
    /// ```
    pub fn from_fn<F>(name: impl Into<String>, f: F) -> Self
    where
        F: FnMut(Option<&dyn EventData>) + Send + 'static,
    {
        Self::new(name, FnNotify(f))
    }

    /// Returns the observer name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Delivers one notification to the handler.
    #[inline]
    pub fn notify(&mut self, data: Option<&dyn EventData>) {
        self.handler.on_notify(data);
    }

    /// Borrows the handler as `T` if that is its concrete type.
    pub fn handler<T: Notify>(&self) -> Option<&T> {
        AsAny::as_any(self.handler.as_ref()).downcast_ref::<T>()
    }

    /// Mutably borrows the handler as `T` if that is its concrete type.
    pub fn handler_mut<T: Notify>(&mut self) -> Option<&mut T> {
        AsAny::as_any_mut(self.handler.as_mut()).downcast_mut::<T>()
    }

    /// Consumes the observer and returns its handler.
    pub fn into_handler(self) -> Box<dyn Notify> {
        self.handler
    }
}

impl fmt::Debug for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Note(&'static str);
    impl EventData for Note {}

    #[derive(Default)]
    struct Recorder {
        notes: Vec<Option<&'static str>>,
    }

    impl Notify for Recorder {
        fn on_notify(&mut self, data: Option<&dyn EventData>) {
            self.notes
                .push(data.and_then(|d| d.downcast_ref::<Note>()).map(|n| n.0));
        }
    }

    #[test]
    fn test_notify_forwards_to_handler() {
        let mut obs = Observer::new("rec", Recorder::default());
        obs.notify(None);
        obs.notify(Some(&Note("hello")));

        let rec = obs.handler::<Recorder>().expect("recorder handler");
        assert_eq!(rec.notes, vec![None, Some("hello")]);
    }

    #[test]
    fn test_name_is_kept() {
        let obs = Observer::from_fn(String::from("display"), |_| {});
        assert_eq!(obs.name(), "display");
        assert_eq!(format!("{obs:?}"), "Observer { name: \"display\", .. }");
    }

    #[test]
    fn test_handler_downcast_wrong_type() {
        let mut obs = Observer::from_fn("closure", |_| {});
        assert!(obs.handler::<Recorder>().is_none());
        assert!(obs.handler_mut::<Recorder>().is_none());
    }

    #[test]
    fn test_handler_mut_and_into_handler() {
        let mut obs = Observer::new("rec", Recorder::default());
        obs.handler_mut::<Recorder>()
            .expect("recorder handler")
            .notes
            .push(Some("seeded"));
        obs.notify(None);

        let mut handler = obs.into_handler();
        handler.on_notify(Some(&Note("after")));
        let rec = AsAny::as_any(handler.as_ref())
            .downcast_ref::<Recorder>()
            .expect("recorder handler");
        assert_eq!(rec.notes, vec![Some("seeded"), None, Some("after")]);
    }
}
