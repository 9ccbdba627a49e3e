//! Allocation audit log.
//!
//! Every registration, admission, and placement decision can be recorded
//! through an [`AuditSink`], giving reporting layers a trail of how the pass
//! unfolded without re-deriving it from final state.

use std::collections::VecDeque;

use uuid::Uuid;

use crate::util::clock::now_ms;

/// Audit event structure.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    /// Event identifier (UUIDv4).
    pub event_id: String,
    /// Applicant or room identifier the event concerns.
    pub subject_id: String,
    /// Action taken (register, admit, place, fallback, waitlist, complete).
    pub action: String,
    /// Timestamp milliseconds.
    pub created_at_ms: u64,
    /// Additional context (e.g. the room id for a placement).
    pub detail: Option<String>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// In-memory audit sink for testing and dev.
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer. The oldest events
    /// are dropped once the bound is reached.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Helper to build an audit event from context.
pub fn build_audit_event(
    subject_id: impl Into<String>,
    action: impl Into<String>,
    detail: Option<String>,
) -> AuditEvent {
    AuditEvent {
        event_id: Uuid::new_v4().to_string(),
        subject_id: subject_id.into(),
        action: action.into(),
        created_at_ms: now_ms(),
        detail,
    }
}
