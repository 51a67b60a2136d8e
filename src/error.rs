//! Error types used by the publisher and the stack.
//!
//! This module defines two error enums:
//!
//! - [`PublisherError`]: misuse of the event registry. Unknown or duplicate
//!   events are configuration errors; unknown or duplicate observers are
//!   subscription errors.
//! - [`StackError`]: stack underflow (domain errors).
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging.

use thiserror::Error;

use crate::stack::StackErrorKind;

/// # Errors produced by a [`Publisher`](crate::Publisher).
///
/// Two families:
/// - **Configuration**: an event name was used before registration, or registered twice.
/// - **Subscription**: an observer name clashes with one already attached, or is unknown on detach.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PublisherError {
    /// The event name was never registered on this publisher.
    #[error("publisher does not support event '{event}'")]
    UnknownEvent {
        /// The unregistered event name.
        event: String,
    },

    /// The event name is already registered.
    #[error("event '{event}' already registered")]
    DuplicateEvent {
        /// The duplicated event name.
        event: String,
    },

    /// An observer with the same name is already attached to the event.
    #[error("observer '{observer}' already attached to event '{event}'")]
    DuplicateObserver {
        /// Event the attach targeted.
        event: String,
        /// Name of the rejected observer.
        observer: String,
    },

    /// No observer with this name is attached to the event.
    #[error("cannot detach observer '{observer}' from event '{event}': observer not found")]
    UnknownObserver {
        /// Event the detach targeted.
        event: String,
        /// Name that was looked up.
        observer: String,
    },
}

impl PublisherError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use stackcast::PublisherError;
    ///
    /// let err = PublisherError::UnknownEvent { event: "Nope".into() };
    /// assert_eq!(err.as_label(), "publisher_unknown_event");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            PublisherError::UnknownEvent { .. } => "publisher_unknown_event",
            PublisherError::DuplicateEvent { .. } => "publisher_duplicate_event",
            PublisherError::DuplicateObserver { .. } => "publisher_duplicate_observer",
            PublisherError::UnknownObserver { .. } => "publisher_unknown_observer",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            PublisherError::UnknownEvent { event } => format!("unknown event: {event}"),
            PublisherError::DuplicateEvent { event } => format!("duplicate event: {event}"),
            PublisherError::DuplicateObserver { event, observer } => {
                format!("duplicate observer: event={event} observer={observer}")
            }
            PublisherError::UnknownObserver { event, observer } => {
                format!("unknown observer: event={event} observer={observer}")
            }
        }
    }

    /// `true` for errors caused by an unregistered or doubly registered event.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PublisherError::UnknownEvent { .. } | PublisherError::DuplicateEvent { .. }
        )
    }

    /// `true` for errors caused by observer names (duplicate attach, unknown detach).
    pub fn is_subscription(&self) -> bool {
        matches!(
            self,
            PublisherError::DuplicateObserver { .. } | PublisherError::UnknownObserver { .. }
        )
    }
}

/// # Errors produced by [`Stack`](crate::Stack) operations.
///
/// Underflow variants are always preceded by a `"StackError"` event carrying
/// the matching [`StackEventData`](crate::StackEventData).
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// `pop` on an empty stack.
    #[error("stack is empty")]
    Empty,

    /// `swap_top` with fewer than two elements.
    #[error("too few arguments on stack")]
    TooFewArguments,
}

impl StackError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use stackcast::StackError;
    ///
    /// assert_eq!(StackError::Empty.as_label(), "stack_empty");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            StackError::Empty => "stack_empty",
            StackError::TooFewArguments => "stack_too_few_arguments",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        format!("{}: {}", self.as_label(), self.kind().message())
    }

    /// The underflow kind, matching the `"StackError"` payload raised before it.
    pub fn kind(&self) -> StackErrorKind {
        match self {
            StackError::Empty => StackErrorKind::Empty,
            StackError::TooFewArguments => StackErrorKind::TooFewArguments,
        }
    }
}

impl From<StackErrorKind> for StackError {
    fn from(kind: StackErrorKind) -> Self {
        match kind {
            StackErrorKind::Empty => StackError::Empty,
            StackErrorKind::TooFewArguments => StackError::TooFewArguments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publisher_error_families() {
        let unknown = PublisherError::UnknownEvent { event: "x".into() };
        let dup = PublisherError::DuplicateEvent { event: "x".into() };
        let obs = PublisherError::DuplicateObserver {
            event: "x".into(),
            observer: "o".into(),
        };
        let missing = PublisherError::UnknownObserver {
            event: "x".into(),
            observer: "o".into(),
        };

        assert!(unknown.is_configuration() && !unknown.is_subscription());
        assert!(dup.is_configuration() && !dup.is_subscription());
        assert!(obs.is_subscription() && !obs.is_configuration());
        assert!(missing.is_subscription() && !missing.is_configuration());
    }

    #[test]
    fn test_display_mentions_names() {
        let err = PublisherError::UnknownEvent {
            event: "Missing".into(),
        };
        assert_eq!(err.to_string(), "publisher does not support event 'Missing'");

        let err = PublisherError::UnknownObserver {
            event: "E".into(),
            observer: "display".into(),
        };
        assert!(err.to_string().contains("display"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_stack_error_kind_roundtrip() {
        for kind in [StackErrorKind::Empty, StackErrorKind::TooFewArguments] {
            let err = StackError::from(kind);
            assert_eq!(err.kind(), kind);
            assert_eq!(err.to_string(), kind.message());
        }
    }

    #[test]
    fn test_empty_message_mentions_empty() {
        assert!(StackError::Empty.to_string().contains("empty"));
        assert_eq!(StackError::Empty.as_message(), "stack_empty: stack is empty");
    }
}
