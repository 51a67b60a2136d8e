//! # Payload of the `"StackError"` event.
//!
//! ```rust
//! use stackcast::{StackErrorKind, StackEventData};
//!
//! let data = StackEventData::new(StackErrorKind::TooFewArguments);
//! assert_eq!(data.kind(), StackErrorKind::TooFewArguments);
//! assert_eq!(data.message(), "too few arguments on stack");
//! ```

use std::fmt;

use crate::events::EventData;

/// Underflow condition reported by the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackErrorKind {
    /// `pop` found no element.
    Empty,
    /// `swap_top` found fewer than two elements.
    TooFewArguments,
}

impl StackErrorKind {
    /// Fixed human-readable message for this kind.
    pub const fn message(self) -> &'static str {
        match self {
            StackErrorKind::Empty => "stack is empty",
            StackErrorKind::TooFewArguments => "too few arguments on stack",
        }
    }
}

impl fmt::Display for StackErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Structured payload raised with `"StackError"` before the failing call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackEventData {
    kind: StackErrorKind,
}

impl StackEventData {
    /// Creates a payload for `kind`.
    #[must_use]
    pub const fn new(kind: StackErrorKind) -> Self {
        Self { kind }
    }

    /// The reported underflow kind.
    #[inline]
    pub fn kind(&self) -> StackErrorKind {
        self.kind
    }

    /// Message of the reported kind.
    #[inline]
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl EventData for StackEventData {}
