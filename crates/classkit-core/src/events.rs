//! Fire-and-forget notification events and sinks.
//!
//! The sink is the system's external notification collaborator: the core
//! hands it events and never looks at the result. Sinks must not influence
//! control flow.

use std::sync::Mutex;

/// A notification emitted by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A user ended their session. No state changed.
    LoggedOut { username: String },
    /// A student submitted assignment text. Nothing is recorded; the
    /// target is not checked for existence.
    AssignmentSubmitted { assignment_id: u32, submission: String },
    /// A student started a quiz. Nothing is recorded.
    QuizTaken { quiz_id: u32 },
}

/// Observer for notification events.
pub trait EventSink: Send + Sync {
    fn on_event(&self, event: &Event);
}

/// Sink that drops every event.
pub struct NoopSink;

impl EventSink for NoopSink {
    fn on_event(&self, _: &Event) {}
}

/// Sink that buffers events for later inspection.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Event>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything received so far, in arrival order.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn on_event(&self, event: &Event) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Sink that forwards events to `tracing` at info level.
pub struct TracingSink;

impl EventSink for TracingSink {
    fn on_event(&self, event: &Event) {
        match event {
            Event::LoggedOut { username } => {
                tracing::info!("user '{username}' logged out");
            }
            Event::AssignmentSubmitted { assignment_id, .. } => {
                tracing::info!("assignment {assignment_id} submitted");
            }
            Event::QuizTaken { quiz_id } => {
                tracing::info!("quiz {quiz_id} taken");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_arrival_order() {
        let sink = RecordingSink::new();
        sink.on_event(&Event::QuizTaken { quiz_id: 1 });
        sink.on_event(&Event::LoggedOut {
            username: "jlin".to_string(),
        });

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], Event::QuizTaken { quiz_id: 1 });
        assert_eq!(
            events[1],
            Event::LoggedOut {
                username: "jlin".to_string()
            }
        );
    }
}
