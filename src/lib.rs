//! # Hostel Allotment
//!
//! A deterministic, priority-driven room allotment engine.
//!
//! This library assigns applicants to capacity-limited rooms using a ranked
//! priority order and per-applicant preference lists, falling back to any
//! available room and finally to a waitlist when capacity runs out. The whole
//! pass is single-threaded and synchronous: one applicant is placed at a time,
//! and each placement completes against the registry before the next begins.
//!
//! ## How a pass works
//!
//! 1. Rooms are registered once at initialization ([`core::RoomRegistry`]).
//! 2. Applications are validated at the intake boundary ([`intake`]) and the
//!    resulting applicants enter the ranking queue ([`core::RankingQueue`]),
//!    ordered by a pure priority score ([`core::scoring`]): base priority
//!    scaled by a special-status multiplier, plus a merit term, with
//!    near-equal scores tie-broken by earlier submission.
//! 3. [`core::AllocationEngine::run`] drains the queue highest-priority
//!    first. Each applicant gets its first preference with capacity, else the
//!    first available room in registration order (flagged as a fallback), else
//!    a waitlist entry. The pass runs exactly once: `Idle -> Running ->
//!    Completed`, and re-running a completed pass is an explicit error.
//!
//! ## Example
//!
//! ```
//! use hostel_allotment::core::{AllocationEngine, EngineState, Room, RoomKind, RoomRegistry};
//! use hostel_allotment::intake::Application;
//!
//! let mut registry = RoomRegistry::new();
//! registry.register(Room::new("A101", RoomKind::Single))?;
//! registry.register(Room::new("B102", RoomKind::Triple))?;
//!
//! let mut engine = AllocationEngine::new(registry);
//! engine.admit(Application {
//!     applicant_id: "CS2024001".into(),
//!     name: "Alice Green".into(),
//!     merit: 4.0,
//!     status: Default::default(),
//!     preferences: vec!["A101".into()],
//!     submitted_at_ms: Some(1_000),
//! })?;
//!
//! engine.run()?;
//! assert_eq!(engine.state(), EngineState::Completed);
//! assert_eq!(engine.allocated().count(), 1);
//! # Ok::<(), hostel_allotment::core::AllotmentError>(())
//! ```
//!
//! For the full algorithm walkthrough, see
//! `tests/allotment_algorithm_test.rs`.

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core allotment abstractions: scoring, ranking, registry, engine, audit.
pub mod core;
/// Configuration models for rooms and seed applications.
pub mod config;
/// Builders to construct an engine from configuration.
pub mod builders;
/// Intake boundary validating raw applications.
pub mod intake;
/// Reporting views over snapshots and partitions.
pub mod report;
/// Shared utilities.
pub mod util;
