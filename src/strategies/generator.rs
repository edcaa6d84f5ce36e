//! Candidate generation: one sweep of the strategy conditions over a
//! symbol's bar window. Each positive condition yields exactly one raw
//! candidate tagged with that strategy's fixed weight.

use chrono::{DateTime, Utc};

use crate::config::EngineConfig;
use crate::indicators::momentum::{macd_cross_default, rsi_default, MacdCross};
use crate::indicators::structure::{breakout_default, scalp_pattern};
use crate::indicators::trend::{ema, ema_fan, sma, touched_ema, FanDirection};
use crate::indicators::volatility::bollinger_bands_default;
use crate::indicators::volume::{volume_spike, SpikeDirection};
use crate::models::candle::Candle;
use crate::models::signal::{Side, SignalCandidate};
use crate::strategies::weights::StrategyKind;

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const PULLBACK_LOOKBACK: usize = 8;
pub const PULLBACK_TOLERANCE: f64 = 0.0025;

pub struct CandidateGenerator;

impl CandidateGenerator {
    /// Run the generic strategy set, plus the extended set for privileged
    /// symbols, against the window. Returns every raw candidate; an empty
    /// vec is the common no-setup cycle.
    pub fn generate(
        config: &EngineConfig,
        symbol: &str,
        candles: &[Candle],
        now: DateTime<Utc>,
    ) -> Vec<SignalCandidate> {
        let mut candidates = Vec::new();
        let Some(last) = candles.last() else {
            return candidates;
        };

        let mut push = |side: Side, strategy: StrategyKind, reason: &str| {
            candidates.push(SignalCandidate::new(
                symbol,
                side,
                strategy,
                vec![reason.to_string()],
                now,
            ));
        };

        // Generic set, every symbol every cycle.
        if let (Some(ma9), Some(ma21)) = (sma(candles, 9), sma(candles, 21)) {
            if ma9 > ma21 && last.close > ma9 {
                push(Side::Buy, StrategyKind::MaCrossover, "MA9 > MA21");
            }
            if ma9 < ma21 && last.close < ma9 {
                push(Side::Sell, StrategyKind::MaCrossover, "MA9 < MA21");
            }
        }

        if let Some(rsi) = rsi_default(candles) {
            if rsi < RSI_OVERSOLD {
                push(Side::Buy, StrategyKind::Rsi, "RSI < 30");
            }
            if rsi > RSI_OVERBOUGHT {
                push(Side::Sell, StrategyKind::Rsi, "RSI > 70");
            }
        }

        match macd_cross_default(candles) {
            Some(MacdCross::Buy) => push(Side::Buy, StrategyKind::Macd, "MACD bullish cross"),
            Some(MacdCross::Sell) => push(Side::Sell, StrategyKind::Macd, "MACD bearish cross"),
            None => {}
        }

        if let Some(bands) = bollinger_bands_default(candles) {
            if last.close < bands.lower {
                push(Side::Buy, StrategyKind::Bollinger, "Close below lower band");
            }
            if last.close > bands.upper {
                push(Side::Sell, StrategyKind::Bollinger, "Close above upper band");
            }
        }

        match volume_spike(candles) {
            Some(SpikeDirection::Up) => push(Side::Buy, StrategyKind::VolumeSpike, "Volume spike"),
            Some(SpikeDirection::Down) => {
                push(Side::Sell, StrategyKind::VolumeSpike, "Volume spike")
            }
            None => {}
        }

        // Extended set, privileged symbols only.
        if config.is_privileged(symbol) {
            match ema_fan(candles) {
                Some(FanDirection::Bullish) => {
                    push(Side::Buy, StrategyKind::EmaFan, "EMA fan bullish")
                }
                Some(FanDirection::Bearish) => {
                    push(Side::Sell, StrategyKind::EmaFan, "EMA fan bearish")
                }
                None => {}
            }

            // Pullback direction reads the long-EMA ordering; both EMAs
            // being defined implies the whole fan stack is.
            if let (Some(ema72), Some(ema200)) = (ema(candles, 72), ema(candles, 200)) {
                if touched_ema(candles, 200, PULLBACK_LOOKBACK, PULLBACK_TOLERANCE) {
                    let side = if ema200 < ema72 { Side::Buy } else { Side::Sell };
                    push(side, StrategyKind::PullbackEma200, "Pullback to EMA200");
                }
            }

            if let Some(side) = scalp_pattern(candles) {
                push(side, StrategyKind::ScalpGold, "Scalp pattern + volume");
            }

            match breakout_default(candles) {
                Some(SpikeDirection::Up) => {
                    push(Side::Buy, StrategyKind::Breakout, "Breakout with volume")
                }
                Some(SpikeDirection::Down) => {
                    push(Side::Sell, StrategyKind::Breakout, "Breakout with volume")
                }
                None => {}
            }
        }

        candidates
    }
}
