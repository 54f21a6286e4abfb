//! Diagnostic sinks.
//!
//! The validator never writes to a console itself; it hands every confirmed
//! problem to a [`DiagnosticSink`].

use std::sync::Mutex;

use crate::types::{DiagnosticEvent, Locator};

/// Receiver for diagnostics emitted by the validator.
pub trait DiagnosticSink {
    /// Surface one diagnostic.
    fn emit(&self, event: DiagnosticEvent);

    /// Turn the caller's locator into a "where did this happen" suffix.
    ///
    /// An empty string means no addendum.
    fn addendum(&self, locator: &Locator) -> String {
        if locator.as_str().is_empty() {
            String::new()
        } else {
            format!("\n    in {locator}")
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn emit(&self, event: DiagnosticEvent) {
        (**self).emit(event)
    }

    fn addendum(&self, locator: &Locator) -> String {
        (**self).addendum(locator)
    }
}

// ---------------------------------------------------------------------------
// Log sink
// ---------------------------------------------------------------------------

/// Forwards diagnostics to the `log` facade at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, event: DiagnosticEvent) {
        log::warn!(target: "ariacheck", "{}", event.render());
    }
}

// ---------------------------------------------------------------------------
// Collecting sink
// ---------------------------------------------------------------------------

/// Keeps every event in memory until drained.
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain all events collected so far.
    pub fn take(&self) -> Vec<DiagnosticEvent> {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *events)
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, event: DiagnosticEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DiagnosticKind;

    fn event(message: &str) -> DiagnosticEvent {
        DiagnosticEvent {
            kind: DiagnosticKind::UnknownAttributes,
            attributes: vec!["aria-foo".into()],
            tag: "div".into(),
            message: message.into(),
            addendum: None,
        }
    }

    #[test]
    fn collecting_sink_drains() {
        let sink = CollectingSink::new();
        sink.emit(event("one"));
        sink.emit(event("two"));
        assert_eq!(sink.len(), 2);

        let events = sink.take();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].message, "two");
        assert!(sink.is_empty());
    }

    #[test]
    fn default_addendum() {
        let sink = CollectingSink::new();
        assert_eq!(sink.addendum(&Locator::new("App > Nav")), "\n    in App > Nav");
        assert_eq!(sink.addendum(&Locator::new("")), "");
    }
}
