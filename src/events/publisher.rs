//! # Named-event publisher.
//!
//! [`Publisher`] owns a table of registered events; each event owns the
//! observers attached to it, keyed by observer name.
//!
//! ## Architecture
//! ```text
//! Publisher
//!   events: HashMap<event name, [Observer; insertion order]>
//!
//! register_event("StackChanged") ──► events["StackChanged"] = []
//! attach("StackChanged", obs)    ──► events["StackChanged"].push(obs)   (moved in)
//! detach("StackChanged", "ui")   ──► remove + return Observer            (moved out)
//! raise("StackChanged", data)    ──► for obs in events["StackChanged"]: obs.notify(data)
//! ```
//!
//! ## Rules
//! - Every event name must be registered before attach/detach/raise.
//! - Observer names are unique per event, not globally.
//! - Dispatch is synchronous: `raise` returns after the last observer returns.
//! - Observers are notified in attach order, exactly once per `raise`.
//! - Attaching or detaching from inside a handler during dispatch is not
//!   supported. `raise` holds `&mut self` for the whole pass, so a handler can
//!   only reach the publisher through shared state, and
//!   [`SharedStack`](crate::SharedStack) panics when that happens.
//! - Dropping the publisher drops every attached observer.
//!
//! ## Composition
//! A type that publishes events holds a `Publisher` privately and forwards only
//! `attach`/`detach`; `raise` then stays reachable only from the owner.
//!
//! ```rust
//! use stackcast::{EventData, Observer, Publisher, PublisherError};
//!
//! #[derive(Debug)]
//! struct Tick(u32);
//! impl EventData for Tick {}
//!
//! struct Clock {
//!     events: Publisher,
//!     now: u32,
//! }
//!
//! impl Clock {
//!     fn new() -> Result<Self, PublisherError> {
//!         let mut events = Publisher::new();
//!         events.register_event("Tick")?;
//!         Ok(Self { events, now: 0 })
//!     }
//!
//!     fn attach(&mut self, event: &str, obs: Observer) -> Result<(), PublisherError> {
//!         self.events.attach(event, obs)
//!     }
//!
//!     fn tick(&mut self) -> Result<(), PublisherError> {
//!         self.now += 1;
//!         self.events.raise("Tick", Some(&Tick(self.now)))
//!     }
//! }
//!
//! let mut clock = Clock::new()?;
//! clock.attach("Tick", Observer::from_fn("print", |d| {
//!     let tick = d.and_then(|d| d.downcast_ref::<Tick>()).map(|t| t.0);
//!     assert!(tick.is_some());
//! }))?;
//! clock.tick()?;
//! # Ok::<(), PublisherError>(())
//! ```

use std::collections::{BTreeSet, HashMap};

use crate::error::PublisherError;
use crate::events::EventData;
use crate::observers::Observer;

/// Observers of one event, in attach order.
type ObserverList = Vec<Observer>;

/// Registry of named events and their observers.
#[derive(Default)]
pub struct Publisher {
    events: HashMap<String, ObserverList>,
}

impl Publisher {
    /// Creates a publisher with no events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new event with an empty observer set.
    ///
    /// Fails with [`PublisherError::DuplicateEvent`] if `name` is already registered.
    pub fn register_event(&mut self, name: impl Into<String>) -> Result<(), PublisherError> {
        let name = name.into();
        if self.events.contains_key(&name) {
            return Err(PublisherError::DuplicateEvent { event: name });
        }
        tracing::trace!(event = %name, "event registered");
        self.events.insert(name, ObserverList::new());
        Ok(())
    }

    /// Registers several events in order.
    ///
    /// Stops at the first duplicate; names registered before it stay registered.
    pub fn register_events<I, S>(&mut self, names: I) -> Result<(), PublisherError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.register_event(name)?;
        }
        Ok(())
    }

    /// Moves `observer` into the observer set of `event`.
    ///
    /// ### Errors
    /// - [`PublisherError::UnknownEvent`] if `event` is not registered.
    /// - [`PublisherError::DuplicateObserver`] if an observer with the same
    ///   name is already attached to `event`.
    ///
    /// On error the observer is dropped.
    pub fn attach(&mut self, event: &str, observer: Observer) -> Result<(), PublisherError> {
        let list = self.checked_event_mut(event)?;
        if list.iter().any(|o| o.name() == observer.name()) {
            return Err(PublisherError::DuplicateObserver {
                event: event.to_string(),
                observer: observer.name().to_string(),
            });
        }
        tracing::debug!(event, observer = observer.name(), "observer attached");
        list.push(observer);
        Ok(())
    }

    /// Removes the observer named `observer` from `event` and hands it back.
    ///
    /// ### Errors
    /// - [`PublisherError::UnknownEvent`] if `event` is not registered.
    /// - [`PublisherError::UnknownObserver`] if no such observer is attached.
    pub fn detach(&mut self, event: &str, observer: &str) -> Result<Observer, PublisherError> {
        let list = self.checked_event_mut(event)?;
        let Some(pos) = list.iter().position(|o| o.name() == observer) else {
            return Err(PublisherError::UnknownObserver {
                event: event.to_string(),
                observer: observer.to_string(),
            });
        };
        tracing::debug!(event, observer, "observer detached");
        Ok(list.remove(pos))
    }

    /// Notifies every observer attached to `event`, in attach order.
    ///
    /// A registered event with no observers is a no-op.
    /// Fails with [`PublisherError::UnknownEvent`] if `event` is not registered.
    pub fn raise(&mut self, event: &str, data: Option<&dyn EventData>) -> Result<(), PublisherError> {
        let list = self.checked_event_mut(event)?;
        tracing::trace!(event, observers = list.len(), "raising event");
        for observer in list.iter_mut() {
            observer.notify(data);
        }
        Ok(())
    }

    /// Returns the names of all registered events.
    pub fn list_events(&self) -> BTreeSet<String> {
        self.events.keys().cloned().collect()
    }

    /// Returns the names of the observers attached to `event`.
    ///
    /// Fails with [`PublisherError::UnknownEvent`] if `event` is not registered.
    pub fn list_event_observers(&self, event: &str) -> Result<BTreeSet<String>, PublisherError> {
        let list = self.checked_event(event)?;
        Ok(list.iter().map(|o| o.name().to_string()).collect())
    }

    /// Returns `true` if `event` is registered.
    #[inline]
    pub fn has_event(&self, event: &str) -> bool {
        self.events.contains_key(event)
    }

    /// Number of observers attached to `event`.
    pub fn observer_count(&self, event: &str) -> Result<usize, PublisherError> {
        self.checked_event(event).map(Vec::len)
    }

    fn checked_event(&self, event: &str) -> Result<&ObserverList, PublisherError> {
        self.events
            .get(event)
            .ok_or_else(|| PublisherError::UnknownEvent {
                event: event.to_string(),
            })
    }

    fn checked_event_mut(&mut self, event: &str) -> Result<&mut ObserverList, PublisherError> {
        self.events
            .get_mut(event)
            .ok_or_else(|| PublisherError::UnknownEvent {
                event: event.to_string(),
            })
    }
}

impl std::fmt::Debug for Publisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (event, list) in &self.events {
            let names: Vec<&str> = list.iter().map(Observer::name).collect();
            map.entry(event, &names);
        }
        map.finish()
    }
}
