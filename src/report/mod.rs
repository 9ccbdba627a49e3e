//! Reporting views over the core's snapshots and partitions.
//!
//! Display layers consume these serializable views instead of core types
//! directly: the priority-order ranking table, per-room availability, and the
//! post-run summary with aggregate counts.

use serde::Serialize;

use crate::core::applicant::{Applicant, Outcome};
use crate::core::engine::{AllocationEngine, Placement};
use crate::core::registry::{Room, RoomRegistry};

/// One row of the priority-order ranking display.
#[derive(Debug, Clone, Serialize)]
pub struct RankingRow {
    /// Rank position, 1-based.
    pub position: usize,
    /// Applicant identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Merit value.
    pub merit: f64,
    /// Special-status label.
    pub status_label: &'static str,
    /// Computed priority score.
    pub score: f64,
}

/// Occupancy status bucket for a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyStatus {
    /// No one placed yet.
    Available,
    /// Some spots taken, some free.
    Partial,
    /// No capacity left.
    Full,
}

/// One row of the room availability display.
#[derive(Debug, Clone, Serialize)]
pub struct RoomRow {
    /// Room identifier.
    pub id: String,
    /// Category label.
    pub kind_label: &'static str,
    /// Current occupancy.
    pub occupied: u32,
    /// Total capacity.
    pub capacity: u32,
    /// Occupancy bucket.
    pub status: OccupancyStatus,
}

/// One row of the post-run allocation result display.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationRow {
    /// Applicant identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Computed priority score.
    pub score: f64,
    /// Allocated room id; `None` when waitlisted.
    pub room_id: Option<String>,
    /// Whether the room came from the fallback scan rather than a stated
    /// preference.
    pub via_fallback: bool,
}

/// Aggregate counts for a completed pass.
#[derive(Debug, Clone, Serialize)]
pub struct AllotmentSummary {
    /// Total applicants processed.
    pub total: usize,
    /// Applicants who received a room.
    pub allocated: usize,
    /// Applicants who ended on the waitlist.
    pub waitlisted: usize,
    /// allocated / total; 0.0 for an empty pass.
    pub success_rate: f64,
    /// total occupied / total capacity; 0.0 for an empty registry.
    pub utilization: f64,
}

/// Priority-order ranking table from a non-destructive snapshot.
#[must_use]
pub fn ranking_table(snapshot: &[Applicant]) -> Vec<RankingRow> {
    snapshot
        .iter()
        .enumerate()
        .map(|(i, a)| RankingRow {
            position: i + 1,
            id: a.id.clone(),
            name: a.name.clone(),
            merit: a.merit,
            status_label: a.status.label(),
            score: a.score,
        })
        .collect()
}

/// Availability table over all rooms, in registry iteration order.
#[must_use]
pub fn room_table(registry: &RoomRegistry) -> Vec<RoomRow> {
    registry.iter().map(room_row).collect()
}

fn room_row(room: &Room) -> RoomRow {
    let status = if room.occupied == 0 {
        OccupancyStatus::Available
    } else if room.available() {
        OccupancyStatus::Partial
    } else {
        OccupancyStatus::Full
    };
    RoomRow {
        id: room.id.clone(),
        kind_label: room.kind.label(),
        occupied: room.occupied,
        capacity: room.capacity,
        status,
    }
}

/// Per-applicant result rows in processing order, fallback placements flagged.
#[must_use]
pub fn allocation_table(engine: &AllocationEngine) -> Vec<AllocationRow> {
    engine
        .records()
        .iter()
        .map(|record| {
            let room_id = match &record.applicant.outcome {
                Outcome::Allocated { room_id } => Some(room_id.clone()),
                Outcome::Waitlisted | Outcome::Unassigned => None,
            };
            AllocationRow {
                id: record.applicant.id.clone(),
                name: record.applicant.name.clone(),
                score: record.applicant.score,
                room_id,
                via_fallback: record.placement == Some(Placement::Fallback),
            }
        })
        .collect()
}

/// Aggregate summary for a pass.
#[must_use]
pub fn summary(engine: &AllocationEngine) -> AllotmentSummary {
    let total = engine.records().len();
    let allocated = engine.allocated().count();
    let waitlisted = engine.waitlisted().count();
    let registry = engine.registry();
    #[allow(clippy::cast_precision_loss)]
    let success_rate = if total == 0 {
        0.0
    } else {
        allocated as f64 / total as f64
    };
    let utilization = if registry.total_capacity() == 0 {
        0.0
    } else {
        f64::from(registry.total_occupied()) / f64::from(registry.total_capacity())
    };
    AllotmentSummary {
        total,
        allocated,
        waitlisted,
        success_rate,
        utilization,
    }
}
