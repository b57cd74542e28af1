//! Status-change notifications.
//!
//! Provides the [`Notify`] capability trait, the exact message templates for
//! each known status, and two implementations: [`ConsoleNotifier`] for the
//! demo binary and [`MemoryNotifier`] as a recording sink for tests and
//! embedders that want to inspect the notification stream.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::tracking::Status;

/// Render one human-readable line for a status transition.
///
/// The six known statuses each have a fixed template; any other status
/// string falls back to a generic one.
pub fn format_message(student: &str, assignment: &str, status: &str) -> String {
    match status {
        "passed" => format!("{student} has passed {assignment}"),
        "failed" => format!("{student} has failed {assignment}"),
        "working" => format!("{student} is working on {assignment}."),
        "submitted" => format!("{student} has submitted {assignment}."),
        "released" => format!("{student}, {assignment} has been released."),
        "final reminder" => {
            format!("{student} has received a final reminder for {assignment}.")
        }
        other => format!("{student}, {assignment} has {other}."),
    }
}

/// Single-method capability for observing status transitions.
///
/// Students and class lists hold an injected `Arc<dyn Notify>`, so the
/// rendering target is a construction-time decision.
pub trait Notify: Send + Sync {
    fn notify(&self, student: &str, assignment: &str, status: Status);
}

/// Emits one formatted line per transition to stdout.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notify for ConsoleNotifier {
    fn notify(&self, student: &str, assignment: &str, status: Status) {
        println!("{}", format_message(student, assignment, status.as_str()));
    }
}

/// A recorded notification event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyEvent {
    pub student: String,
    pub assignment: String,
    pub status: Status,
}

/// Records every notification in memory instead of rendering it.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    events: Mutex<Vec<NotifyEvent>>,
}

impl MemoryNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of all events recorded so far, in emission order.
    pub fn events(&self) -> Vec<NotifyEvent> {
        self.events.lock().clone()
    }

    /// How many recorded events carry the given status.
    pub fn count_of(&self, status: Status) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| e.status == status)
            .count()
    }
}

impl Notify for MemoryNotifier {
    fn notify(&self, student: &str, assignment: &str, status: Status) {
        self.events.lock().push(NotifyEvent {
            student: student.to_string(),
            assignment: assignment.to_string(),
            status,
        });
    }
}
