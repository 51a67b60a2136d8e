//! Events: payloads and the named-event publisher.
//!
//! This module groups the event **payload model** and the **publisher** that
//! owns observers and dispatches to them.
//!
//! ## Contents
//! - [`EventData`] payload capability (with checked downcast)
//! - [`Publisher`] named-event registry with synchronous dispatch
//!
//! ## Quick reference
//! - **Publishers**: [`Stack`](crate::Stack) (through a private `Publisher`),
//!   or any user type that composes one.
//! - **Consumers**: [`Observer`](crate::Observer)s attached per event.

mod event;
mod publisher;

pub use event::{AsAny, EventData};
pub use publisher::Publisher;
