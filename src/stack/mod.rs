//! Numeric stack: the publisher's main consumer.
//!
//! ## Contents
//! - [`Stack`] value sequence with a private publisher
//! - [`StackEventData`], [`StackErrorKind`] payload of `"StackError"`
//! - [`StackConfig`], [`StackBuilder`] construction
//! - [`SharedStack`], [`instance`] synchronized handle and process-wide instance
//!
//! See `stack/core.rs` for the event contract.

mod builder;
mod config;
mod event_data;
mod shared;
mod core;

pub use builder::StackBuilder;
pub use config::StackConfig;
pub use event_data::{StackErrorKind, StackEventData};
pub use shared::{instance, SharedStack};
pub use self::core::{Stack, STACK_CHANGED, STACK_ERROR};
