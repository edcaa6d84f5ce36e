//! Confidence modifiers. Applied to every surviving candidate in a fixed
//! order: news penalty folds into the base, then higher-timeframe trend,
//! market strength together with correlation, and last the fear gate. The
//! order is load-bearing; each rounding step feeds the next multiplier.

use chrono::{DateTime, Utc};

use crate::config::EngineConfig;
use crate::indicators::trend::ema;
use crate::models::candle::Candle;
use crate::models::context::{HigherTimeframes, NewsItem};
use crate::models::signal::{Side, SignalCandidate};
use crate::strategies::weights::MAX_WEIGHT;

/// Penalty when an in-window headline names the symbol or a macro term.
pub const NEWS_PENALTY_MACRO: f64 = 0.35;
/// Penalty for any other in-window headline.
pub const NEWS_PENALTY_AMBIENT: f64 = 0.10;

pub const COUNTER_TREND_FACTOR: f64 = 0.45;
pub const ALIGNED_TREND_FACTOR: f64 = 1.08;
pub const STRENGTH_GAIN: f64 = 0.15;
pub const CORRELATION_GAIN: f64 = 0.25;
pub const FEAR_FACTOR: f64 = 0.8;

/// Bars a higher-timeframe set must have before it is trusted for trend.
const HIGHER_TF_MIN_BARS: usize = 50;
/// Bars the evaluation window must have for the self-trend fallback.
const SELF_TREND_MIN_BARS: usize = 200;

const STRENGTH_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
}

/// Cycle-wide modifier inputs, computed once and applied per candidate.
#[derive(Debug, Clone, Copy)]
pub struct ModifierInputs {
    pub news_penalty: f64,
    pub trend: Option<TrendDirection>,
    /// Volume imbalance over the last 10 bars, in [-1, 1].
    pub market_strength: f64,
    /// Cross-asset correlation factor, in [0, 1].
    pub correlation: f64,
    /// True when the fear index sits above the configured threshold.
    pub fear: bool,
}

impl ModifierInputs {
    /// Neutral inputs: no news, no trend read, balanced volume, no
    /// correlation, calm market.
    pub fn neutral() -> Self {
        Self {
            news_penalty: 0.0,
            trend: None,
            market_strength: 0.0,
            correlation: 0.0,
            fear: false,
        }
    }
}

/// Scan the news list for an item published within the impact window of
/// `now`. The FIRST in-window item decides the penalty, not the nearest or
/// the most severe one; later items are never consulted. Items without a
/// publish time are skipped.
pub fn news_penalty(
    config: &EngineConfig,
    symbol: &str,
    news: &[NewsItem],
    now: DateTime<Utc>,
) -> f64 {
    let window = chrono::Duration::minutes(config.news_window_mins);
    for item in news {
        let Some(published) = item.published_at else {
            continue;
        };
        if (now - published).abs() <= window {
            let title = item.title.to_lowercase();
            let symbol_lower = symbol.to_lowercase();
            if config.is_privileged(symbol)
                && (title.contains(&symbol_lower)
                    || config.macro_keywords.iter().any(|k| title.contains(k)))
            {
                return NEWS_PENALTY_MACRO;
            }
            return NEWS_PENALTY_AMBIENT;
        }
    }
    0.0
}

/// Higher-timeframe trend from EMA(72) vs EMA(200), daily preferred over
/// weekly. A chosen set shorter than 50 bars (or absent) falls back to the
/// evaluation window itself, but only when that window has at least 200
/// bars. A chosen set of 50..200 bars leaves EMA(200) undefined and the
/// trend unread; there is no second fallback.
pub fn higher_trend(higher: &HigherTimeframes, base: &[Candle]) -> Option<TrendDirection> {
    let direction = |bars: &[Candle]| -> Option<TrendDirection> {
        let ema72 = ema(bars, 72)?;
        let ema200 = ema(bars, 200)?;
        Some(if ema72 > ema200 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        })
    };

    match higher.preferred() {
        Some(bars) if bars.len() >= HIGHER_TF_MIN_BARS => direction(bars),
        _ if base.len() >= SELF_TREND_MIN_BARS => direction(base),
        _ => None,
    }
}

/// Intraday volume imbalance: (up-bar volume - down-bar volume) over their
/// sum, last 10 bars. Doji bars contribute to neither side. Returns 0 for
/// short windows and when no bar has direction.
pub fn market_strength(candles: &[Candle]) -> f64 {
    if candles.len() < STRENGTH_WINDOW {
        return 0.0;
    }
    let window = &candles[candles.len() - STRENGTH_WINDOW..];
    let up: f64 = window.iter().filter(|c| c.is_up()).map(|c| c.volume).sum();
    let down: f64 = window.iter().filter(|c| c.is_down()).map(|c| c.volume).sum();
    let denom = up + down;
    (up - down) / if denom == 0.0 { 1.0 } else { denom }
}

/// Apply the modifier chain to one candidate and return its confidence.
///
/// The base folds the news penalty into the weight ratio and clamps to
/// [50, 100] before rounding. The floor is NOT re-applied afterwards:
/// counter-trend and fear multipliers may push the value below 50, which
/// marks the candidate for discard at selection. The cap at 100 holds
/// throughout.
pub fn score(candidate: &SignalCandidate, inputs: &ModifierInputs) -> u32 {
    let base = candidate.weight() as f64 / MAX_WEIGHT as f64 * 100.0 * (1.0 - inputs.news_penalty);
    let mut conf = base.clamp(50.0, 100.0).round();

    if let Some(direction) = inputs.trend {
        let counter = matches!(
            (direction, candidate.side),
            (TrendDirection::Up, Side::Sell) | (TrendDirection::Down, Side::Buy)
        );
        if counter {
            conf *= COUNTER_TREND_FACTOR;
        } else {
            conf = (conf * ALIGNED_TREND_FACTOR).min(100.0);
        }
    }

    conf = (conf
        * (1.0 + inputs.market_strength * STRENGTH_GAIN)
        * (1.0 - inputs.correlation * CORRELATION_GAIN))
        .round();

    if inputs.fear {
        conf = (conf * FEAR_FACTOR).round();
    }

    conf.min(100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::weights::StrategyKind;

    fn candidate(strategy: StrategyKind, side: Side) -> SignalCandidate {
        SignalCandidate::new("GOLD", side, strategy, vec![], Utc::now())
    }

    #[test]
    fn base_floors_low_weights_at_fifty() {
        // rsi: 14/40 = 35% -> clamped to 50 before any modifier
        let c = candidate(StrategyKind::Rsi, Side::Buy);
        assert_eq!(score(&c, &ModifierInputs::neutral()), 50);
    }

    #[test]
    fn max_weight_scores_hundred_neutral() {
        let c = candidate(StrategyKind::ScalpGold, Side::Buy);
        assert_eq!(score(&c, &ModifierInputs::neutral()), 100);
    }

    #[test]
    fn counter_trend_can_push_below_fifty() {
        let c = candidate(StrategyKind::Breakout, Side::Sell);
        let inputs = ModifierInputs {
            trend: Some(TrendDirection::Up),
            ..ModifierInputs::neutral()
        };
        // base 83, counter-trend 37.35 -> rounds to 37: discard territory
        assert_eq!(score(&c, &inputs), 37);
    }

    #[test]
    fn aligned_trend_caps_at_hundred() {
        let c = candidate(StrategyKind::ScalpGold, Side::Buy);
        let inputs = ModifierInputs {
            trend: Some(TrendDirection::Up),
            ..ModifierInputs::neutral()
        };
        assert_eq!(score(&c, &inputs), 100);
    }

    #[test]
    fn fear_gate_scales_by_point_eight() {
        let c = candidate(StrategyKind::ScalpGold, Side::Buy);
        let calm = score(&c, &ModifierInputs::neutral());
        let fearful = score(
            &c,
            &ModifierInputs {
                fear: true,
                ..ModifierInputs::neutral()
            },
        );
        assert_eq!(fearful, (calm as f64 * FEAR_FACTOR).round() as u32);
    }

    #[test]
    fn macro_news_penalty_cuts_the_base() {
        let c = candidate(StrategyKind::ScalpGold, Side::Buy);
        let inputs = ModifierInputs {
            news_penalty: NEWS_PENALTY_MACRO,
            ..ModifierInputs::neutral()
        };
        // 100 * 0.65 = 65
        assert_eq!(score(&c, &inputs), 65);
    }

    #[test]
    fn correlation_dampens() {
        let c = candidate(StrategyKind::ScalpGold, Side::Buy);
        let inputs = ModifierInputs {
            correlation: 1.0,
            ..ModifierInputs::neutral()
        };
        // 100 * 0.75
        assert_eq!(score(&c, &inputs), 75);
    }

    #[test]
    fn strength_boosts_and_drags() {
        let c = candidate(StrategyKind::Breakout, Side::Buy);
        let bullish = ModifierInputs {
            market_strength: 1.0,
            ..ModifierInputs::neutral()
        };
        let bearish = ModifierInputs {
            market_strength: -1.0,
            ..ModifierInputs::neutral()
        };
        // base 83 -> 95.45 and 70.55
        assert_eq!(score(&c, &bullish), 95);
        assert_eq!(score(&c, &bearish), 71);
    }
}
