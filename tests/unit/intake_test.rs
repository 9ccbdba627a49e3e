//! Tests for the intake boundary

use hostel_allotment::core::{AllotmentError, Room, RoomKind, RoomRegistry, SpecialStatus};
use hostel_allotment::intake::{admit, Application};

fn registry() -> RoomRegistry {
    let mut reg = RoomRegistry::new();
    reg.register(Room::new("A101", RoomKind::Single)).unwrap();
    reg.register(Room::new("C201", RoomKind::Double)).unwrap();
    reg
}

fn application() -> Application {
    Application {
        applicant_id: "CS2024005".to_string(),
        name: "Sophia Kim".to_string(),
        merit: 3.3,
        status: SpecialStatus::FinancialAid,
        preferences: vec!["A101".to_string(), "C201".to_string()],
        submitted_at_ms: Some(80_000),
    }
}

#[test]
fn test_admit_builds_scored_applicant() {
    let applicant = admit(application(), &registry()).unwrap();
    assert_eq!(applicant.id, "CS2024005");
    assert_eq!(applicant.status, SpecialStatus::FinancialAid);
    // 1000 * 1.3 + 3.3 * 100, give or take the sub-epsilon time term.
    assert!((applicant.score - 1630.0).abs() < 0.5);
}

#[test]
fn test_admit_rejects_bad_merit() {
    let mut app = application();
    app.merit = 4.5;
    assert!(matches!(
        admit(app, &registry()),
        Err(AllotmentError::InvalidInput(_))
    ));
}

#[test]
fn test_admit_rejects_unknown_room() {
    let mut app = application();
    app.preferences.push("Z999".to_string());
    let err = admit(app, &registry()).unwrap_err();
    assert!(matches!(err, AllotmentError::InvalidInput(msg) if msg.contains("Z999")));
}

#[test]
fn test_admit_leaves_registry_untouched_on_failure() {
    let reg = registry();
    let mut app = application();
    app.merit = -1.0;
    let _ = admit(app, &reg);
    assert_eq!(reg.total_occupied(), 0);
    assert_eq!(reg.len(), 2);
}

#[test]
fn test_application_deserializes_original_labels() {
    let app: Application = serde_json::from_str(
        r#"{"id": "S1", "name": "Noah Thompson", "merit": 3.2,
            "status": "Medical", "preferences": ["A101"]}"#,
    )
    .unwrap();
    assert_eq!(app.status, SpecialStatus::Medical);
    assert!(app.submitted_at_ms.is_none());
}
