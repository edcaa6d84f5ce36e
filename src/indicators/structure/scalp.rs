//! Scalp entry pattern: a single decisive bar on stepped-up volume, vetoed
//! when short-period RSI is already stretched in the entry direction.

use crate::indicators::momentum::rsi;
use crate::models::candle::Candle;
use crate::models::signal::Side;

pub const SCALP_MIN_BARS: usize = 10;
pub const SCALP_VOLUME_STEP: f64 = 1.5;
pub const SCALP_BODY_RATIO: f64 = 0.6;
pub const SCALP_RSI_PERIOD: usize = 6;

/// Fires when the latest bar's volume exceeds 1.5x the previous bar's AND
/// its body covers more than 60% of its range AND RSI(6) is not already
/// overbought (Buy) / oversold (Sell) in the entry direction. Side follows
/// the latest close against the previous close.
pub fn scalp_pattern(candles: &[Candle]) -> Option<Side> {
    if candles.len() < SCALP_MIN_BARS {
        return None;
    }
    let last = &candles[candles.len() - 1];
    let prev = &candles[candles.len() - 2];
    let rsi6 = rsi(candles, SCALP_RSI_PERIOD)?;

    if last.volume <= prev.volume * SCALP_VOLUME_STEP {
        return None;
    }
    if last.body_ratio() <= SCALP_BODY_RATIO {
        return None;
    }

    let side = if last.close > prev.close {
        Side::Buy
    } else {
        Side::Sell
    };
    match side {
        Side::Buy if rsi6 < 70.0 => Some(side),
        Side::Sell if rsi6 > 30.0 => Some(side),
        _ => None,
    }
}
