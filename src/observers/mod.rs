//! # Observers attached to publisher events.
//!
//! This module provides the [`Observer`] wrapper, the [`Notify`] handler trait,
//! and a built-in reference handler.
//!
//! ## Architecture
//! ```text
//! Publisher::raise(event, data)
//!        │
//!        ├──► Observer("display").notify(data) ──► Notify::on_notify(data)
//!        ├──► Observer("undo").notify(data)    ──► Notify::on_notify(data)
//!        └──► Observer("log").notify(data)     ──► LogWriter
//! ```
//!
//! ## Handler types
//! - **Stateless handlers**: closures via [`Observer::from_fn`]
//! - **Stateful handlers**: any type implementing [`Notify`]; recover it after
//!   detach with [`Observer::handler`] or [`Observer::into_handler`]

#[cfg(feature = "logging")]
mod log;
mod observer;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use observer::{FnNotify, Notify, Observer};
