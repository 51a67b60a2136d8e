use crate::error::PublisherError;
use crate::observers::Observer;

use super::{SharedStack, Stack, StackConfig};

/// Builder for constructing a [`Stack`] with observers attached up front.
///
/// ```rust
/// use stackcast::{Observer, Stack, StackConfig, STACK_CHANGED, STACK_ERROR};
///
/// let stack = Stack::builder(StackConfig::default())
///     .with_observer(STACK_CHANGED, Observer::from_fn("display", |_| {}))
///     .with_observer(STACK_ERROR, Observer::from_fn("display", |_| {}))
///     .build()?;
///
/// assert_eq!(stack.list_event_observers(STACK_ERROR)?.len(), 1);
/// # Ok::<(), stackcast::PublisherError>(())
/// ```
pub struct StackBuilder {
    cfg: StackConfig,
    observers: Vec<(String, Observer)>,
}

impl StackBuilder {
    /// Creates a new builder with the given configuration.
    #[must_use]
    pub fn new(cfg: StackConfig) -> Self {
        Self {
            cfg,
            observers: Vec::new(),
        }
    }

    /// Queues `observer` for attachment to `event`.
    pub fn with_observer(mut self, event: impl Into<String>, observer: Observer) -> Self {
        self.observers.push((event.into(), observer));
        self
    }

    /// Queues several observers for attachment to the same `event`.
    pub fn with_observers<I>(mut self, event: impl Into<String>, observers: I) -> Self
    where
        I: IntoIterator<Item = Observer>,
    {
        let event = event.into();
        self.observers
            .extend(observers.into_iter().map(|obs| (event.clone(), obs)));
        self
    }

    /// Builds the stack and attaches the queued observers in order.
    ///
    /// Fails on the first attach error (unknown event or duplicate observer name).
    pub fn build(self) -> Result<Stack, PublisherError> {
        let mut stack = Stack::with_config(&self.cfg);
        for (event, observer) in self.observers {
            stack.attach(&event, observer)?;
        }
        Ok(stack)
    }

    /// Builds the stack and wraps it into a [`SharedStack`] handle.
    pub fn build_shared(self) -> Result<SharedStack, PublisherError> {
        self.build().map(SharedStack::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::{STACK_CHANGED, STACK_ERROR};

    #[test]
    fn test_build_attaches_in_order() {
        let stack = Stack::builder(StackConfig::default())
            .with_observers(
                STACK_CHANGED,
                [
                    Observer::from_fn("a", |_| {}),
                    Observer::from_fn("b", |_| {}),
                ],
            )
            .with_observer(STACK_ERROR, Observer::from_fn("a", |_| {}))
            .build()
            .unwrap();

        assert_eq!(stack.list_event_observers(STACK_CHANGED).unwrap().len(), 2);
        assert_eq!(stack.list_event_observers(STACK_ERROR).unwrap().len(), 1);
    }

    #[test]
    fn test_build_rejects_unknown_event() {
        let err = Stack::builder(StackConfig::default())
            .with_observer("StackRenamed", Observer::from_fn("a", |_| {}))
            .build()
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_build_rejects_duplicate_observer() {
        let err = StackBuilder::new(StackConfig::default())
            .with_observer(STACK_CHANGED, Observer::from_fn("a", |_| {}))
            .with_observer(STACK_CHANGED, Observer::from_fn("a", |_| {}))
            .build_shared()
            .unwrap_err();
        assert!(err.is_subscription());
    }
}
