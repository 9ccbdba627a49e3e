//! Tests for configuration validation

use hostel_allotment::config::{AllotmentConfig, RoomConfig};
use hostel_allotment::core::RoomKind;
use hostel_allotment::intake::Application;

fn valid_room(id: &str) -> RoomConfig {
    RoomConfig {
        id: id.to_string(),
        kind: RoomKind::Double,
        capacity: None,
        occupied: 0,
    }
}

fn valid_application(id: &str) -> Application {
    Application {
        applicant_id: id.to_string(),
        name: format!("Applicant {id}"),
        merit: 3.2,
        status: Default::default(),
        preferences: vec!["A101".to_string()],
        submitted_at_ms: Some(1_000),
    }
}

#[test]
fn test_room_config_validation() {
    assert!(valid_room("A101").validate().is_ok());
}

#[test]
fn test_room_config_capacity_override() {
    let mut cfg = valid_room("A101");
    cfg.capacity = Some(4);
    let room = cfg.to_room();
    assert_eq!(room.capacity, 4);
    assert_eq!(room.kind, RoomKind::Double);
}

#[test]
fn test_room_config_invalid_zero_capacity() {
    let mut cfg = valid_room("A101");
    cfg.capacity = Some(0);
    assert!(cfg.validate().is_err());
}

#[test]
fn test_room_config_invalid_over_occupancy() {
    let mut cfg = valid_room("A101");
    cfg.occupied = 3;
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_requires_a_room() {
    let cfg = AllotmentConfig {
        rooms: vec![],
        applications: vec![],
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_rejects_bad_application_merit() {
    let mut app = valid_application("S1");
    app.merit = 7.5;
    let cfg = AllotmentConfig {
        rooms: vec![valid_room("A101")],
        applications: vec![app],
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_from_json_str() {
    let cfg = AllotmentConfig::from_json_str(
        r#"{
            "rooms": [
                {"id": "A101", "kind": "Single"},
                {"id": "B102", "kind": "Triple", "capacity": 4, "occupied": 2}
            ],
            "applications": [
                {"id": "S1", "name": "Maya Patel", "merit": 3.8,
                 "status": "Sports", "preferences": ["B102"]}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.rooms.len(), 2);
    assert_eq!(cfg.rooms[1].capacity, Some(4));
    assert_eq!(cfg.applications.len(), 1);
}

#[test]
fn test_config_from_json_str_rejects_invalid() {
    assert!(AllotmentConfig::from_json_str("{").is_err());
    assert!(AllotmentConfig::from_json_str(r#"{"rooms": []}"#).is_err());
}
