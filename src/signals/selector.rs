//! Per-cycle winner selection: confidence floor, then weight-first ordering.

use crate::models::signal::ScoredCandidate;

/// Candidates scoring below this after the modifier chain are discarded.
pub const MIN_CONFIDENCE: u32 = 50;

pub struct SignalSelector;

impl SignalSelector {
    /// Drop sub-50 candidates, then order by strategy weight descending
    /// with confidence descending as the tiebreak. Weight dominates: a
    /// heavier strategy at lower confidence outranks a lighter one at
    /// higher confidence. Returns the top survivor.
    pub fn select(mut scored: Vec<ScoredCandidate>) -> Option<ScoredCandidate> {
        scored.retain(|s| s.confidence >= MIN_CONFIDENCE);
        scored.sort_by(|a, b| {
            b.weight()
                .cmp(&a.weight())
                .then(b.confidence.cmp(&a.confidence))
        });
        scored.into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::signal::{Side, SignalCandidate};
    use crate::strategies::weights::StrategyKind;
    use chrono::Utc;

    fn scored(strategy: StrategyKind, confidence: u32) -> ScoredCandidate {
        ScoredCandidate {
            candidate: SignalCandidate::new("GOLD", Side::Buy, strategy, vec![], Utc::now()),
            confidence,
        }
    }

    #[test]
    fn weight_beats_confidence() {
        let winner = SignalSelector::select(vec![
            scored(StrategyKind::Rsi, 99),
            scored(StrategyKind::Breakout, 55),
        ])
        .unwrap();
        assert_eq!(winner.candidate.strategy, StrategyKind::Breakout);
    }

    #[test]
    fn confidence_breaks_weight_ties() {
        let winner = SignalSelector::select(vec![
            scored(StrategyKind::Macd, 60),
            scored(StrategyKind::Macd, 80),
        ])
        .unwrap();
        assert_eq!(winner.confidence, 80);
    }

    #[test]
    fn sub_fifty_candidates_never_win() {
        assert!(SignalSelector::select(vec![scored(StrategyKind::Breakout, 49)]).is_none());
    }

    #[test]
    fn empty_input_selects_nothing() {
        assert!(SignalSelector::select(vec![]).is_none());
    }
}
