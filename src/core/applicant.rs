//! Applicant data model.

use serde::{Deserialize, Serialize};

use crate::core::scoring;

/// Maximum number of room preferences an applicant may state.
pub const MAX_PREFERENCES: usize = 3;

/// Special-priority status granted to an applicant. Closed set; each variant
/// maps to a fixed score multiplier (see [`SpecialStatus::multiplier`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpecialStatus {
    /// No special status; baseline multiplier.
    #[default]
    None,
    /// Medical grounds.
    Medical,
    /// Sports quota.
    Sports,
    /// Academic excellence.
    #[serde(rename = "Academic Excellence")]
    AcademicExcellence,
    /// Financial aid.
    #[serde(rename = "Financial Aid")]
    FinancialAid,
}

impl SpecialStatus {
    /// Fixed priority multiplier for this status. `None` is the 1.0 baseline;
    /// every other variant is strictly greater so special status dominates a
    /// purely merit-based ordering within the 0.0-4.0 merit range.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::None => 1.0,
            Self::FinancialAid => 1.3,
            Self::Sports => 1.5,
            Self::AcademicExcellence => 1.8,
            Self::Medical => 2.0,
        }
    }

    /// Human-readable label matching the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Medical => "Medical",
            Self::Sports => "Sports",
            Self::AcademicExcellence => "Academic Excellence",
            Self::FinancialAid => "Financial Aid",
        }
    }
}

/// Allocation outcome of an applicant. Set exactly once during the pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Not yet processed by the allocation engine.
    #[default]
    Unassigned,
    /// Placed into the room with the given id.
    Allocated {
        /// Identifier of the room the applicant was placed into.
        room_id: String,
    },
    /// No room anywhere had capacity.
    Waitlisted,
}

/// An applicant seeking allocation, ranked by priority score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Applicant {
    /// Unique applicant identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Merit value (GPA-like), bounded 0.0-4.0 at intake.
    pub merit: f64,
    /// Special-priority status.
    pub status: SpecialStatus,
    /// Ordered room preferences, most preferred first. At most
    /// [`MAX_PREFERENCES`] entries, each validated against the registry.
    pub preferences: Vec<String>,
    /// Submission timestamp in milliseconds since epoch. Earlier submissions
    /// win score ties.
    pub submitted_at_ms: u64,
    /// Priority score computed at construction; pure function of
    /// (merit, status, timestamp).
    pub score: f64,
    /// Allocation outcome, set exactly once by the engine.
    pub outcome: Outcome,
}

impl Applicant {
    /// Construct an applicant and compute its priority score.
    ///
    /// Callers are expected to validate fields first; the intake module is
    /// the supported entry point.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        merit: f64,
        status: SpecialStatus,
        preferences: Vec<String>,
        submitted_at_ms: u64,
    ) -> Self {
        let score = scoring::priority_score(merit, status, submitted_at_ms);
        Self {
            id: id.into(),
            name: name.into(),
            merit,
            status,
            preferences,
            submitted_at_ms,
            score,
            outcome: Outcome::Unassigned,
        }
    }
}
