//! Error types for allotment operations.

use thiserror::Error;

/// Errors produced by allotment components.
#[derive(Debug, Error)]
pub enum AllotmentError {
    /// An identifier was registered or admitted twice.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    /// An operation referenced an unknown room or applicant id.
    #[error("not found: {0}")]
    NotFound(String),
    /// Placement was attempted in a room with no remaining capacity.
    /// The engine checks availability first, so this signals a logic defect.
    #[error("room full: {0}")]
    RoomFull(String),
    /// Extraction was attempted on an empty ranking queue.
    /// The engine guards its loop with an emptiness check, so this signals a
    /// logic defect.
    #[error("ranking queue empty")]
    EmptyRanking,
    /// A completed allocation pass was invoked again.
    #[error("allocation already completed")]
    AlreadyCompleted,
    /// Malformed applicant data was rejected at intake.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
