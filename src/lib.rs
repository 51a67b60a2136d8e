//! # stackcast
//!
//! **stackcast** is a small named-event publication library and the numeric
//! stack built on top of it.
//!
//! A [`Publisher`] owns named events; each event owns the [`Observer`]s attached
//! to it. [`Stack`] composes a private publisher and broadcasts
//! `"StackChanged"` and `"StackError"` as a side effect of its operations.
//! Dispatch is synchronous: every observer has returned before the operation
//! that raised the event returns.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     caller (command layer, UI, tests)
//!        │ push / pop / swap_top / get_elements
//!        ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Stack                                                            │
//! │  - elements: Vec<f64> (top = last)                                │
//! │  - events: Publisher (private)                                    │
//! │      ├─ "StackChanged" ──► [Observer, Observer, ...]              │
//! │      └─ "StackError"   ──► [Observer, ...]                        │
//! └──────┬──────────────────────────────────────┬─────────────────────┘
//!        │ raise("StackChanged", None)          │ raise("StackError", StackEventData)
//!        ▼                                      ▼
//!   observer.notify(data)                  observer.notify(data)
//!        │                                      │
//!        ▼                                      ▼
//!   Notify::on_notify()                    Notify::on_notify()
//!   (display, undo log, LogWriter, ...)    (then the caller gets Err(StackError))
//! ```
//!
//! ### Ownership
//! ```text
//! Observer ──attach──► Publisher (exclusive owner) ──detach──► caller
//!                            │
//!                            └─ dropped with the Publisher if never detached
//! ```
//!
//! ## Features
//! | Area              | Description                                                     | Key types / traits                          |
//! |-------------------|-----------------------------------------------------------------|---------------------------------------------|
//! | **Publisher**     | Named events, owned observers, synchronous dispatch.            | [`Publisher`]                               |
//! | **Observer API**  | Named sinks with pluggable handlers (closures or types).       | [`Observer`], [`Notify`]                    |
//! | **Payloads**      | Type-safe event payloads with checked downcast.                 | [`EventData`], [`StackEventData`]           |
//! | **Stack**         | LIFO of `f64` raising change and error events.                  | [`Stack`], [`STACK_CHANGED`], [`STACK_ERROR`] |
//! | **Sharing**       | Thread-safe handle and a lazily created process-wide instance.  | [`SharedStack`], [`instance`]               |
//! | **Errors**        | Typed errors for registry misuse and stack underflow.           | [`PublisherError`], [`StackError`]          |
//! | **Configuration** | Construction settings and builder.                              | [`StackConfig`], [`StackBuilder`]           |
//!
//! ## Optional features
//! - `logging` (default): exports a simple built-in [`LogWriter`] handler _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use stackcast::{Observer, Stack, StackError, StackEventData, STACK_CHANGED, STACK_ERROR};
//!
//! let mut stack = Stack::new();
//! let messages = Arc::new(Mutex::new(Vec::new()));
//!
//! let m = Arc::clone(&messages);
//! stack.attach(STACK_ERROR, Observer::from_fn("display", move |data| {
//!     if let Some(err) = data.and_then(|d| d.downcast_ref::<StackEventData>()) {
//!         m.lock().unwrap().push(err.message());
//!     }
//! }))?;
//! stack.attach(STACK_CHANGED, Observer::from_fn("redraw", |_| {}))?;
//!
//! stack.push(1.0);
//! stack.push(2.0);
//! assert_eq!(stack.pop(), Ok(2.0));
//! assert_eq!(stack.swap_top(), Err(StackError::TooFewArguments));
//! assert_eq!(*messages.lock().unwrap(), vec!["too few arguments on stack"]);
//! # Ok::<(), stackcast::PublisherError>(())
//! ```
mod error;
mod events;
mod observers;
mod stack;

// ---- Public re-exports ----

pub use error::{PublisherError, StackError};
pub use events::{AsAny, EventData, Publisher};
pub use observers::{FnNotify, Notify, Observer};
pub use stack::{
    instance, SharedStack, Stack, StackBuilder, StackConfig, StackErrorKind, StackEventData,
    STACK_CHANGED, STACK_ERROR,
};

// Optional: expose a simple built-in logger handler (demo/reference).
// Enabled by default; opt out with `default-features = false`.
#[cfg(feature = "logging")]
pub use observers::LogWriter;
