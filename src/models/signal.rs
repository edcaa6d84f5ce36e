//! Signal data models: candidates produced by the strategy sweep, scored
//! candidates after confidence modification, and the emitted record handed
//! to the transport collaborator.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::strategies::weights::StrategyKind;

/// Directional side of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// +1 for Buy, -1 for Sell; used when attaching stop/target levels.
    pub fn sign(&self) -> f64 {
        match self {
            Side::Buy => 1.0,
            Side::Sell => -1.0,
        }
    }
}

/// A strategy's raw proposal, before confidence adjustment and rate
/// limiting. Created and consumed within one evaluation cycle.
#[derive(Debug, Clone)]
pub struct SignalCandidate {
    pub symbol: String,
    pub side: Side,
    pub strategy: StrategyKind,
    pub reasons: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl SignalCandidate {
    pub fn new(
        symbol: impl Into<String>,
        side: Side,
        strategy: StrategyKind,
        reasons: Vec<String>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            strategy,
            reasons,
            generated_at,
        }
    }

    /// Fixed strategy weight. Derived from the strategy kind rather than
    /// stored, so it cannot drift from the lookup table.
    pub fn weight(&self) -> u32 {
        self.strategy.weight()
    }
}

/// A candidate with its post-modifier confidence attached.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub candidate: SignalCandidate,
    /// Post-modifier confidence. Capped at 100; values below 50 mark the
    /// candidate for discard by the selector, never for emission.
    pub confidence: u32,
}

impl ScoredCandidate {
    pub fn weight(&self) -> u32 {
        self.candidate.weight()
    }
}

/// How long an emitted signal stays actionable.
pub const SIGNAL_EXPIRE_SECS: i64 = 30 * 60;

/// The record broadcast to clients when a cycle wins its cooldown gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmittedSignal {
    pub asset: String,
    pub side: Side,
    pub strategy: StrategyKind,
    /// Always within [50, 100].
    pub confidence: u32,
    pub reasons: Vec<String>,
    pub weight: u32,
    pub entry: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profits: Option<Vec<f64>>,
    pub time: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl EmittedSignal {
    pub fn from_winner(
        winner: &ScoredCandidate,
        entry: f64,
        stop_loss: Option<f64>,
        take_profits: Option<Vec<f64>>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            asset: winner.candidate.symbol.clone(),
            side: winner.candidate.side,
            strategy: winner.candidate.strategy,
            confidence: winner.confidence,
            reasons: winner.candidate.reasons.clone(),
            weight: winner.weight(),
            entry,
            stop_loss,
            take_profits,
            time: now,
            expires_at: now + Duration::seconds(SIGNAL_EXPIRE_SECS),
        }
    }
}
