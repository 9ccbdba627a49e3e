//! Pure priority scoring.
//!
//! The score is a deterministic function of (merit, special status, submission
//! timestamp). The constants below are part of the contract: the scheme is
//! monotonic in merit, and every special-status multiplier above 1.0 adds a
//! bonus of at least `0.3 * BASE_PRIORITY = 300`, so a status holder outranks
//! any non-status applicant whose merit lead is under 3.0 points. Multipliers
//! of 1.5 and above (`Sports`, `AcademicExcellence`, `Medical`) dominate the
//! entire 0.0-4.0 merit range outright.

use crate::core::applicant::SpecialStatus;

/// Base score every applicant starts from, scaled by the status multiplier.
pub const BASE_PRIORITY: f64 = 1000.0;

/// Weight applied to the merit value.
pub const MERIT_WEIGHT: f64 = 100.0;

/// Weight applied to the windowed timestamp term. Negative: earlier
/// submissions score marginally higher. The magnitude keeps the whole term
/// below [`SCORE_EPSILON`] so it can never flip a merit- or status-driven
/// ordering; it only nudges otherwise-equal scores toward the earlier entry.
pub const TIME_WEIGHT: f64 = -1.0e-9;

/// Window the timestamp is reduced into before weighting (24 hours in ms).
pub const TIME_WINDOW_MS: u64 = 86_400_000;

/// Scores closer than this are treated as tied and ordered by submission
/// timestamp instead of raw float comparison. Tunable, but it must stay above
/// the maximum magnitude of the time term (~0.086) and below the smallest
/// meaningful merit gap (0.01 merit = 1.0 score).
pub const SCORE_EPSILON: f64 = 0.5;

/// Inclusive merit bounds accepted at intake.
pub const MERIT_MIN: f64 = 0.0;
/// Upper merit bound.
pub const MERIT_MAX: f64 = 4.0;

/// Compute the priority score for an applicant. Higher score = higher
/// priority. Pure and deterministic: identical inputs always produce the
/// identical value.
#[must_use]
pub fn priority_score(merit: f64, status: SpecialStatus, submitted_at_ms: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let time_term = (submitted_at_ms % TIME_WINDOW_MS) as f64 * TIME_WEIGHT;
    BASE_PRIORITY * status.multiplier() + merit * MERIT_WEIGHT + time_term
}

/// Whether two scores are close enough to be considered tied.
#[must_use]
pub fn scores_tied(a: f64, b: f64) -> bool {
    (a - b).abs() < SCORE_EPSILON
}
