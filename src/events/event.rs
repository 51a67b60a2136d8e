//! # Event payloads passed from a publisher to its observers.
//!
//! [`EventData`] is the capability every payload implements. Observers receive
//! `Option<&dyn EventData>` and recover the concrete type with
//! `downcast_ref::<T>()`.
//!
//! Events that only signal "something happened" (such as `"StackChanged"`)
//! are raised with `None`.
//!
//! ## Example
//! ```rust
//! use stackcast::EventData;
//!
//! #[derive(Debug)]
//! struct Resized { rows: usize }
//!
//! impl EventData for Resized {}
//!
//! #[derive(Debug)]
//! struct Closed;
//!
//! impl EventData for Closed {}
//!
//! let payload: &dyn EventData = &Resized { rows: 24 };
//! assert_eq!(payload.downcast_ref::<Resized>().map(|r| r.rows), Some(24));
//! assert!(payload.downcast_ref::<Closed>().is_none());
//! ```

use std::any::Any;
use std::fmt;

/// Upcast helper used for payload and handler downcasting.
///
/// Implemented automatically for every `'static` type; there is no need to
/// implement it by hand.
pub trait AsAny: Any {
    /// Returns `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Returns `self` as `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Payload delivered alongside an event notification.
///
/// Implement it (an empty `impl` is enough) for any type an event should carry.
pub trait EventData: AsAny + fmt::Debug + Send + Sync + 'static {}

impl dyn EventData {
    /// Returns the payload as `T` if that is its concrete type.
    #[inline]
    pub fn downcast_ref<T: EventData>(&self) -> Option<&T> {
        AsAny::as_any(self).downcast_ref::<T>()
    }

    /// Returns `true` if the payload's concrete type is `T`.
    #[inline]
    pub fn is<T: EventData>(&self) -> bool {
        AsAny::as_any(self).is::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Ping(u8);
    impl EventData for Ping {}

    #[derive(Debug)]
    struct Pong;
    impl EventData for Pong {}

    #[test]
    fn test_downcast_to_concrete_type() {
        let data: Box<dyn EventData> = Box::new(Ping(7));
        assert_eq!(data.downcast_ref::<Ping>(), Some(&Ping(7)));
        assert!(data.is::<Ping>());
    }

    #[test]
    fn test_downcast_to_wrong_type() {
        let data: &dyn EventData = &Pong;
        assert!(data.downcast_ref::<Ping>().is_none());
        assert!(!data.is::<Ping>());
    }
}
