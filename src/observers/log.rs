//! # LogWriter: simple notification logger
//!
//! A minimal handler that writes every notification it receives through
//! `tracing`. Use it for tests or demos; install a `tracing` subscriber to see
//! the output.
//!
//! ## Example output
//! ```text
//! [notify] observer="log"
//! [stack-error] observer="log" kind=Empty msg="stack is empty"
//! [notify] observer="log" data=Resized { rows: 24 }
//! ```

use crate::events::EventData;
use crate::observers::{Notify, Observer};
use crate::stack::StackEventData;

/// Notification writer handler.
#[derive(Debug, Clone)]
pub struct LogWriter {
    label: String,
    seen: u64,
}

impl LogWriter {
    /// Construct a new [`LogWriter`] that tags its lines with `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            seen: 0,
        }
    }

    /// Wraps a new writer into an [`Observer`] named after its label.
    #[must_use]
    pub fn observer(label: impl Into<String>) -> Observer {
        let label = label.into();
        Observer::new(label.clone(), Self::new(label))
    }

    /// Number of notifications written so far.
    pub fn seen(&self) -> u64 {
        self.seen
    }
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new("log")
    }
}

/// Tag that opens the line written for `data`.
fn tag(data: Option<&dyn EventData>) -> &'static str {
    match data {
        Some(d) if d.is::<StackEventData>() => "[stack-error]",
        _ => "[notify]",
    }
}

impl Notify for LogWriter {
    fn on_notify(&mut self, data: Option<&dyn EventData>) {
        self.seen += 1;
        let tag = tag(data);
        match data {
            None => {
                tracing::info!("{tag} observer={:?}", self.label);
            }
            Some(d) => match d.downcast_ref::<StackEventData>() {
                Some(err) => {
                    tracing::warn!(
                        "{tag} observer={:?} kind={:?} msg={:?}",
                        self.label,
                        err.kind(),
                        err.message()
                    );
                }
                None => {
                    tracing::info!("{tag} observer={:?} data={:?}", self.label, d);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::StackErrorKind;

    #[test]
    fn test_counts_every_notification() {
        let mut obs = LogWriter::observer("log");
        assert_eq!(obs.name(), "log");

        obs.notify(None);
        obs.notify(Some(&StackEventData::new(StackErrorKind::Empty)));

        assert_eq!(obs.handler::<LogWriter>().map(LogWriter::seen), Some(2));
    }

    #[derive(Debug)]
    struct Resized;
    impl EventData for Resized {}

    #[test]
    fn test_payloadless_notifications_use_neutral_tag() {
        assert_eq!(tag(None), "[notify]");
        assert_eq!(tag(Some(&Resized)), "[notify]");
        assert_eq!(
            tag(Some(&StackEventData::new(StackErrorKind::TooFewArguments))),
            "[stack-error]"
        );
    }
}
