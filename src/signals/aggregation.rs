//! Contention resolution for one emission slot.
//!
//! Used when several already-filtered candidates, possibly produced across
//! cycles, compete to be broadcast once. Stale candidates fall out first;
//! among the fresh ones the highest confidence wins and is re-stamped to
//! the resolution time.

use chrono::{DateTime, Duration, Utc};

use crate::models::signal::ScoredCandidate;

/// Candidates older than this no longer compete.
pub const CANDIDATE_TTL_SECS: i64 = 5 * 60;

pub struct SignalAggregator;

impl SignalAggregator {
    /// Discard candidates generated more than five minutes before `now`,
    /// pick by confidence descending (weight as tiebreak), and stamp the
    /// winner's timestamp to `now`.
    pub fn resolve(
        candidates: Vec<ScoredCandidate>,
        now: DateTime<Utc>,
    ) -> Option<ScoredCandidate> {
        let ttl = Duration::seconds(CANDIDATE_TTL_SECS);
        let mut fresh: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter(|c| now - c.candidate.generated_at <= ttl)
            .collect();
        fresh.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then(b.weight().cmp(&a.weight()))
        });
        let mut chosen = fresh.into_iter().next()?;
        chosen.candidate.generated_at = now;
        Some(chosen)
    }
}
