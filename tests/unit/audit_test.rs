//! Tests for the audit sink

use hostel_allotment::core::{build_audit_event, AuditSink, InMemoryAuditSink};

#[test]
fn test_in_memory_sink_stores_events() {
    let mut sink = InMemoryAuditSink::new(16);
    sink.record(build_audit_event("S1", "admit", None));
    sink.record(build_audit_event("S1", "place", Some("A101".to_string())));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].action, "admit");
    assert_eq!(events[1].detail.as_deref(), Some("A101"));
}

#[test]
fn test_in_memory_sink_respects_bound() {
    let mut sink = InMemoryAuditSink::new(3);
    for i in 0..10 {
        sink.record(build_audit_event(format!("S{i}"), "admit", None));
    }
    let events = sink.events();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].subject_id, "S7");
    assert_eq!(events[2].subject_id, "S9");
}

#[test]
fn test_event_has_timestamp_and_unique_id() {
    let a = build_audit_event("S1", "waitlist", None);
    let b = build_audit_event("S1", "waitlist", None);
    assert!(a.created_at_ms > 0);
    assert_ne!(a.event_id, b.event_id);
}
