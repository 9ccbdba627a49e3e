//! Allocation engine: drains the ranking queue and places applicants.
//!
//! The engine exclusively owns the ranking queue and room registry for the
//! duration of a run. A run is a single synchronous pass: extract the
//! highest-ranked applicant, try its stated preferences in order, fall back
//! to a registry-order scan, or waitlist. Each applicant's outcome is set
//! exactly once and never revisited.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::applicant::{Applicant, Outcome};
use crate::core::audit::{build_audit_event, AuditSink};
use crate::core::error::AllotmentError;
use crate::core::ranking::RankingQueue;
use crate::core::registry::RoomRegistry;
use crate::intake::{self, Application};

/// Lifecycle state of an allocation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    /// Intake is open; no pass has started.
    Idle,
    /// A pass is in progress.
    Running,
    /// The pass finished; partitions are finalized. Terminal.
    Completed,
}

/// How an allocated applicant was matched to its room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Placed into a stated preference; `rank` is the zero-based position in
    /// the preference list.
    Preferred {
        /// Zero-based position in the applicant's preference list.
        rank: usize,
    },
    /// No preference had capacity; placed by scanning the registry in
    /// registration order.
    Fallback,
}

/// Outcome record for one applicant, in processing (priority) order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRecord {
    /// The applicant with its final outcome set.
    pub applicant: Applicant,
    /// How the room was chosen; `None` for waitlisted applicants.
    pub placement: Option<Placement>,
}

/// Priority-driven allocation engine.
///
/// Owns the [`RankingQueue`] and [`RoomRegistry`]; intake is only accepted
/// while [`EngineState::Idle`].
pub struct AllocationEngine {
    registry: RoomRegistry,
    ranking: RankingQueue,
    records: Vec<AllocationRecord>,
    admitted: HashSet<String>,
    state: EngineState,
    audit: Option<Box<dyn AuditSink>>,
}

impl std::fmt::Debug for AllocationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllocationEngine")
            .field("registry", &self.registry)
            .field("ranking", &self.ranking)
            .field("records", &self.records)
            .field("admitted", &self.admitted)
            .field("state", &self.state)
            .field("audit", &self.audit.as_ref().map(|_| "dyn AuditSink"))
            .finish()
    }
}

impl AllocationEngine {
    /// Create an engine over a populated room registry.
    #[must_use]
    pub fn new(registry: RoomRegistry) -> Self {
        Self {
            registry,
            ranking: RankingQueue::new(),
            records: Vec::new(),
            admitted: HashSet::new(),
            state: EngineState::Idle,
            audit: None,
        }
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// The room registry (read-only view for reporting).
    #[must_use]
    pub const fn registry(&self) -> &RoomRegistry {
        &self.registry
    }

    /// Non-destructive priority-order snapshot of pending applicants.
    #[must_use]
    pub fn ranking_snapshot(&self) -> Vec<Applicant> {
        self.ranking.peek_all()
    }

    /// Number of applicants still awaiting the pass.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.ranking.len()
    }

    /// Validate an application and enqueue the resulting applicant.
    ///
    /// Only legal while the engine is [`EngineState::Idle`]; the queue and
    /// registry are exclusively the engine's during and after a run.
    ///
    /// # Errors
    /// [`AllotmentError::InvalidInput`] for malformed data or when intake is
    /// closed, [`AllotmentError::DuplicateKey`] for an already-admitted id.
    pub fn admit(&mut self, application: Application) -> Result<(), AllotmentError> {
        if self.state != EngineState::Idle {
            return Err(AllotmentError::InvalidInput(
                "intake is closed: allocation pass already started".into(),
            ));
        }
        if self.admitted.contains(&application.applicant_id) {
            return Err(AllotmentError::DuplicateKey(application.applicant_id));
        }
        let applicant = intake::admit(application, &self.registry)?;
        self.admitted.insert(applicant.id.clone());
        tracing::info!(
            applicant = %applicant.id,
            score = applicant.score,
            status = applicant.status.label(),
            "applicant admitted"
        );
        self.record_audit(&applicant.id, "admit", None);
        self.ranking.insert(applicant);
        Ok(())
    }

    /// Run the allocation pass.
    ///
    /// Transitions `Idle -> Running`, processes every queued applicant in
    /// priority order, then transitions `Running -> Completed`.
    ///
    /// # Errors
    /// [`AllotmentError::AlreadyCompleted`] if invoked after a finished pass
    /// (state is left unchanged). Internal invariant violations
    /// ([`AllotmentError::RoomFull`], [`AllotmentError::EmptyRanking`],
    /// [`AllotmentError::NotFound`]) propagate after being logged.
    pub fn run(&mut self) -> Result<(), AllotmentError> {
        if self.state == EngineState::Completed {
            tracing::warn!("allocation pass re-invoked after completion");
            return Err(AllotmentError::AlreadyCompleted);
        }
        self.state = EngineState::Running;
        let total = self.ranking.len();
        tracing::info!(applicants = total, rooms = self.registry.len(), "allocation pass started");

        while !self.ranking.is_empty() {
            let mut applicant = self.ranking.extract_max()?;
            let placement = self.place_one(&applicant)?;
            match placement {
                Some((room_id, how)) => {
                    applicant.outcome = Outcome::Allocated {
                        room_id: room_id.clone(),
                    };
                    match how {
                        Placement::Preferred { rank } => {
                            tracing::info!(
                                applicant = %applicant.id,
                                room = %room_id,
                                preference_rank = rank,
                                "allocated to preferred room"
                            );
                            self.record_audit(&applicant.id, "place", Some(room_id));
                        }
                        Placement::Fallback => {
                            tracing::info!(
                                applicant = %applicant.id,
                                room = %room_id,
                                "allocated via fallback scan"
                            );
                            self.record_audit(&applicant.id, "fallback", Some(room_id));
                        }
                    }
                    self.records.push(AllocationRecord {
                        applicant,
                        placement: Some(how),
                    });
                }
                None => {
                    applicant.outcome = Outcome::Waitlisted;
                    tracing::warn!(applicant = %applicant.id, "waitlisted: no capacity anywhere");
                    self.record_audit(&applicant.id, "waitlist", None);
                    self.records.push(AllocationRecord {
                        applicant,
                        placement: None,
                    });
                }
            }
        }

        self.state = EngineState::Completed;
        self.record_audit("pass", "complete", None);
        tracing::info!(
            allocated = self.allocated().count(),
            waitlisted = self.waitlisted().count(),
            "allocation pass completed"
        );
        Ok(())
    }

    /// Pick a room for one applicant: preferences in order, then fallback.
    /// Returns `None` when nothing anywhere has capacity. Does not mutate the
    /// applicant; the caller records the outcome.
    fn place_one(
        &mut self,
        applicant: &Applicant,
    ) -> Result<Option<(String, Placement)>, AllotmentError> {
        for (rank, room_id) in applicant.preferences.iter().enumerate() {
            if self.registry.has_capacity(room_id)? {
                self.registry.place(room_id)?;
                return Ok(Some((room_id.clone(), Placement::Preferred { rank })));
            }
        }
        let fallback = self
            .registry
            .iter()
            .find(|room| room.available())
            .map(|room| room.id.clone());
        if let Some(room_id) = fallback {
            self.registry.place(&room_id)?;
            return Ok(Some((room_id, Placement::Fallback)));
        }
        Ok(None)
    }

    /// Outcome records in processing (priority) order. Empty until a pass has
    /// run.
    #[must_use]
    pub fn records(&self) -> &[AllocationRecord] {
        &self.records
    }

    /// Records of applicants who received a room.
    pub fn allocated(&self) -> impl Iterator<Item = &AllocationRecord> {
        self.records
            .iter()
            .filter(|r| matches!(r.applicant.outcome, Outcome::Allocated { .. }))
    }

    /// Records of applicants who ended on the waitlist.
    pub fn waitlisted(&self) -> impl Iterator<Item = &AllocationRecord> {
        self.records
            .iter()
            .filter(|r| r.applicant.outcome == Outcome::Waitlisted)
    }

    fn record_audit(&mut self, subject: &str, action: &str, detail: Option<String>) {
        if let Some(sink) = self.audit.as_mut() {
            sink.record(build_audit_event(subject, action, detail));
        }
    }
}
