//! Core allotment abstractions: scoring, ranking, registry, and the engine.

pub mod applicant;
pub mod audit;
pub mod engine;
pub mod error;
pub mod ranking;
pub mod registry;
pub mod scoring;

pub use applicant::{Applicant, Outcome, SpecialStatus, MAX_PREFERENCES};
pub use audit::{build_audit_event, AuditEvent, AuditSink, InMemoryAuditSink};
pub use engine::{AllocationEngine, AllocationRecord, EngineState, Placement};
pub use error::{AllotmentError, AppResult};
pub use ranking::RankingQueue;
pub use registry::{Room, RoomKind, RoomRegistry};
