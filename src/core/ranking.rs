//! Priority-ordered ranking queue over applicants.
//!
//! Backed by a binary heap for O(log n) insert and extract. Ordering is
//! score-descending with an epsilon band: scores closer than
//! [`scoring::SCORE_EPSILON`] are treated as tied and ordered by earlier
//! submission timestamp, which keeps the ranking deterministic in the face of
//! floating-point noise.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::applicant::Applicant;
use crate::core::error::AllotmentError;
use crate::core::scoring;

/// Wrapper to make applicants orderable by score (highest first), with
/// near-equal scores broken by earlier submission and then by id so the
/// order is total.
#[derive(Debug)]
struct RankedApplicant {
    applicant: Applicant,
}

impl PartialEq for RankedApplicant {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedApplicant {}

impl PartialOrd for RankedApplicant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedApplicant {
    fn cmp(&self, other: &Self) -> Ordering {
        if scoring::scores_tied(self.applicant.score, other.applicant.score) {
            // Earlier submission wins (reversed for max-heap), id as the
            // final tie-breaker.
            other
                .applicant
                .submitted_at_ms
                .cmp(&self.applicant.submitted_at_ms)
                .then_with(|| other.applicant.id.cmp(&self.applicant.id))
        } else {
            // Scores are finite (validated at intake) and more than epsilon
            // apart here, so partial_cmp cannot fail.
            self.applicant
                .score
                .partial_cmp(&other.applicant.score)
                .unwrap_or(Ordering::Equal)
        }
    }
}

/// Max-ordered multiset of applicants awaiting allocation.
#[derive(Debug, Default)]
pub struct RankingQueue {
    heap: BinaryHeap<RankedApplicant>,
}

impl RankingQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an applicant. O(log n); legal at any time, including between
    /// extractions.
    pub fn insert(&mut self, applicant: Applicant) {
        self.heap.push(RankedApplicant { applicant });
    }

    /// Remove and return the highest-ranked applicant.
    ///
    /// # Errors
    /// [`AllotmentError::EmptyRanking`] when the queue is empty.
    pub fn extract_max(&mut self) -> Result<Applicant, AllotmentError> {
        self.heap
            .pop()
            .map(|ranked| ranked.applicant)
            .ok_or(AllotmentError::EmptyRanking)
    }

    /// Highest-ranked applicant without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Applicant> {
        self.heap.peek().map(|ranked| &ranked.applicant)
    }

    /// Non-destructive full ranking snapshot, highest priority first.
    ///
    /// Repeated calls without intervening inserts or extractions return the
    /// same sequence.
    #[must_use]
    pub fn peek_all(&self) -> Vec<Applicant> {
        let mut ordered: Vec<&RankedApplicant> = self.heap.iter().collect();
        ordered.sort_by(|a, b| b.cmp(a));
        ordered.into_iter().map(|r| r.applicant.clone()).collect()
    }

    /// Number of queued applicants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no applicants remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
