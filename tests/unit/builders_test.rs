//! Tests for engine construction from configuration

use hostel_allotment::builders::build_engine;
use hostel_allotment::config::{AllotmentConfig, RoomConfig};
use hostel_allotment::core::{AllotmentError, EngineState, RoomKind};
use hostel_allotment::intake::Application;

fn config() -> AllotmentConfig {
    AllotmentConfig {
        rooms: vec![
            RoomConfig {
                id: "A101".to_string(),
                kind: RoomKind::Single,
                capacity: None,
                occupied: 0,
            },
            RoomConfig {
                id: "A102".to_string(),
                kind: RoomKind::Double,
                capacity: None,
                occupied: 1,
            },
        ],
        applications: vec![Application {
            applicant_id: "S1".to_string(),
            name: "Emma Davis".to_string(),
            merit: 3.7,
            status: Default::default(),
            preferences: vec!["A101".to_string()],
            submitted_at_ms: Some(500),
        }],
    }
}

#[test]
fn test_build_engine_registers_and_admits() {
    let engine = build_engine(&config(), None).unwrap();
    assert_eq!(engine.state(), EngineState::Idle);
    assert_eq!(engine.registry().len(), 2);
    assert_eq!(engine.registry().total_occupied(), 1);
    assert_eq!(engine.pending(), 1);
}

#[test]
fn test_build_engine_rejects_duplicate_rooms() {
    let mut cfg = config();
    cfg.rooms.push(cfg.rooms[0].clone());
    let err = build_engine(&cfg, None).unwrap_err();
    assert!(matches!(err, AllotmentError::DuplicateKey(id) if id == "A101"));
}

#[test]
fn test_build_engine_rejects_unknown_preference() {
    let mut cfg = config();
    cfg.applications[0].preferences = vec!["Z999".to_string()];
    assert!(matches!(
        build_engine(&cfg, None),
        Err(AllotmentError::InvalidInput(_))
    ));
}

#[test]
fn test_build_engine_rejects_invalid_config() {
    let mut cfg = config();
    cfg.rooms.clear();
    assert!(matches!(
        build_engine(&cfg, None),
        Err(AllotmentError::InvalidInput(_))
    ));
}

#[test]
fn test_built_engine_runs_to_completion() {
    let mut engine = build_engine(&config(), None).unwrap();
    engine.run().unwrap();
    assert_eq!(engine.state(), EngineState::Completed);
    assert_eq!(engine.allocated().count(), 1);
}
