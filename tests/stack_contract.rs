use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use stackcast::{
    Observer, Stack, StackError, StackErrorKind, StackEventData, STACK_CHANGED, STACK_ERROR,
};

/// Ordered record of everything observers saw, plus the caller's results.
#[derive(Debug, Clone, PartialEq)]
enum Entry {
    Changed,
    ErrorEvent(StackErrorKind),
    Returned(Result<(), StackErrorKind>),
}

type Trace = Arc<Mutex<Vec<Entry>>>;

fn traced_stack() -> (Stack, Trace) {
    let trace = Trace::default();
    let changed = Arc::clone(&trace);
    let errors = Arc::clone(&trace);

    let stack = Stack::builder(Default::default())
        .with_observer(
            STACK_CHANGED,
            Observer::from_fn("trace", move |_| {
                changed.lock().unwrap().push(Entry::Changed);
            }),
        )
        .with_observer(
            STACK_ERROR,
            Observer::from_fn("trace", move |data| {
                let kind = data
                    .and_then(|d| d.downcast_ref::<StackEventData>())
                    .map(StackEventData::kind)
                    .unwrap();
                errors.lock().unwrap().push(Entry::ErrorEvent(kind));
            }),
        )
        .build()
        .unwrap();

    (stack, trace)
}

fn record<T>(trace: &Trace, result: &Result<T, StackError>) {
    let entry = Entry::Returned(result.as_ref().map(|_| ()).map_err(StackError::kind));
    trace.lock().unwrap().push(entry);
}

#[test]
fn error_event_is_raised_before_the_error_returns() {
    let (mut stack, trace) = traced_stack();

    let popped = stack.pop();
    record(&trace, &popped);
    let swapped = stack.swap_top();
    record(&trace, &swapped);

    assert_eq!(
        *trace.lock().unwrap(),
        vec![
            Entry::ErrorEvent(StackErrorKind::Empty),
            Entry::Returned(Err(StackErrorKind::Empty)),
            Entry::ErrorEvent(StackErrorKind::TooFewArguments),
            Entry::Returned(Err(StackErrorKind::TooFewArguments)),
        ]
    );
}

#[test]
fn change_event_follows_the_mutation() {
    let (mut stack, trace) = traced_stack();

    stack.push(1.0);
    stack.push(2.0);
    let swapped = stack.swap_top();
    record(&trace, &swapped);

    assert_eq!(
        *trace.lock().unwrap(),
        vec![
            Entry::Changed,
            Entry::Changed,
            Entry::Changed,
            Entry::Returned(Ok(())),
        ]
    );
    assert_eq!(stack.get_elements(2), vec![1.0, 2.0]);
}

#[test]
fn raise_reaches_only_observers_of_that_event() {
    let mut stack = Stack::new();
    let changed = Arc::new(AtomicUsize::new(0));
    let errors = Arc::new(AtomicUsize::new(0));

    for name in ["a", "b", "c"] {
        let c = Arc::clone(&changed);
        stack
            .attach(
                STACK_CHANGED,
                Observer::from_fn(name, move |_| {
                    c.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .unwrap();
    }
    let e = Arc::clone(&errors);
    stack
        .attach(
            STACK_ERROR,
            Observer::from_fn("a", move |_| {
                e.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .unwrap();

    stack.push(5.0);
    assert_eq!(changed.load(Ordering::SeqCst), 3);
    assert_eq!(errors.load(Ordering::SeqCst), 0);

    stack.clear();
    let _ = stack.pop();
    assert_eq!(changed.load(Ordering::SeqCst), 3);
    assert_eq!(errors.load(Ordering::SeqCst), 1);
}

#[test]
fn detach_returns_ownership() {
    let (mut stack, trace) = traced_stack();

    let mut observer = stack.detach(STACK_CHANGED, "trace").unwrap();
    assert_eq!(observer.name(), "trace");
    assert!(stack.list_event_observers(STACK_CHANGED).unwrap().is_empty());

    stack.push(1.0);
    assert!(trace.lock().unwrap().is_empty());

    // The caller owns it now and can still drive it, or attach it again.
    observer.notify(None);
    assert_eq!(*trace.lock().unwrap(), vec![Entry::Changed]);

    stack.attach(STACK_CHANGED, observer).unwrap();
    stack.push(2.0);
    assert_eq!(trace.lock().unwrap().len(), 2);
}

#[test]
fn subscription_errors_are_reported() {
    let (mut stack, _trace) = traced_stack();

    let err = stack
        .attach(STACK_CHANGED, Observer::from_fn("trace", |_| {}))
        .unwrap_err();
    assert!(err.is_subscription());

    let err = stack.detach(STACK_ERROR, "nobody").unwrap_err();
    assert!(err.is_subscription());

    let err = stack.detach("Unregistered", "trace").unwrap_err();
    assert!(err.is_configuration());
    assert!(stack.list_event_observers("Unregistered").is_err());
}

proptest! {
    #[test]
    fn pops_return_pushes_in_reverse(values in prop::collection::vec(-1.0e9f64..1.0e9, 0..64)) {
        let mut stack = Stack::new();
        for v in &values {
            stack.push(*v);
        }
        prop_assert_eq!(stack.size(), values.len());

        let top_first: Vec<f64> = values.iter().rev().copied().collect();
        prop_assert_eq!(stack.get_elements(values.len() + 3), top_first.clone());

        let mut popped = Vec::with_capacity(values.len());
        for _ in 0..values.len() {
            popped.push(stack.pop().unwrap());
        }
        prop_assert_eq!(popped, top_first);
        prop_assert_eq!(stack.size(), 0);
        prop_assert_eq!(stack.pop(), Err(StackError::Empty));
    }

    #[test]
    fn quiet_pushes_never_notify(values in prop::collection::vec(any::<f64>(), 0..32), loud in 0usize..8) {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        let mut stack = Stack::new();
        stack
            .attach(STACK_CHANGED, Observer::from_fn("count", move |_| {
                h.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();

        for v in &values {
            stack.push_quiet(*v);
        }
        for i in 0..loud {
            stack.push(i as f64);
        }
        prop_assert_eq!(hits.load(Ordering::SeqCst), loud);
        prop_assert_eq!(stack.size(), values.len() + loud);
    }
}
