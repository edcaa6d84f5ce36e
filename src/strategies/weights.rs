//! Strategy identities and their fixed weights.
//!
//! Higher weight means the desk considers the setup more robust. The table
//! is the single source of a strategy's weight; candidates derive it from
//! their kind instead of storing it, so it cannot be mutated downstream.

use serde::{Deserialize, Serialize};

/// Largest weight in the table; the confidence base normalizes against it.
pub const MAX_WEIGHT: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    ScalpGold,
    Breakout,
    Macd,
    EmaFan,
    PullbackEma200,
    MaCrossover,
    Bollinger,
    VolumeSpike,
    Rsi,
}

impl StrategyKind {
    pub fn weight(&self) -> u32 {
        match self {
            StrategyKind::ScalpGold => 40,
            StrategyKind::Breakout => 33,
            StrategyKind::Macd => 30,
            StrategyKind::EmaFan => 28,
            StrategyKind::PullbackEma200 => 25,
            StrategyKind::MaCrossover => 24,
            StrategyKind::Bollinger => 18,
            StrategyKind::VolumeSpike => 16,
            StrategyKind::Rsi => 14,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::ScalpGold => "scalp_gold",
            StrategyKind::Breakout => "breakout",
            StrategyKind::Macd => "macd",
            StrategyKind::EmaFan => "ema_fan",
            StrategyKind::PullbackEma200 => "pullback_ema200",
            StrategyKind::MaCrossover => "ma_crossover",
            StrategyKind::Bollinger => "bollinger",
            StrategyKind::VolumeSpike => "volume_spike",
            StrategyKind::Rsi => "rsi",
        }
    }

    /// Every strategy the generator can produce, heaviest first.
    pub fn all() -> [StrategyKind; 9] {
        [
            StrategyKind::ScalpGold,
            StrategyKind::Breakout,
            StrategyKind::Macd,
            StrategyKind::EmaFan,
            StrategyKind::PullbackEma200,
            StrategyKind::MaCrossover,
            StrategyKind::Bollinger,
            StrategyKind::VolumeSpike,
            StrategyKind::Rsi,
        ]
    }
}
