//! EMA (Exponential Moving Average) and the EMA-stack checks built on it:
//! the 9/21/72/200 fan and the EMA-200 touch used by the pullback strategy.

use crate::common::math;
use crate::models::candle::Candle;

pub const FAN_PERIODS: [usize; 4] = [9, 21, 72, 200];

/// EMA of the last `period` closes, seeded from the close at `len - period`
/// (raw-close seed, not a warm SMA). `None` with fewer bars.
pub fn ema(candles: &[Candle], period: usize) -> Option<f64> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::ema(&closes, period)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanDirection {
    Bullish,
    Bearish,
}

/// Strict ordering check across EMA(9), EMA(21), EMA(72), EMA(200).
///
/// Bullish: each longer EMA strictly below the next shorter one and the
/// latest close above EMA(9). Bearish is the mirror. `None` when any EMA is
/// undefined or the stack is not strictly ordered.
pub fn ema_fan(candles: &[Candle]) -> Option<FanDirection> {
    let last = candles.last()?;
    let ema9 = ema(candles, FAN_PERIODS[0])?;
    let ema21 = ema(candles, FAN_PERIODS[1])?;
    let ema72 = ema(candles, FAN_PERIODS[2])?;
    let ema200 = ema(candles, FAN_PERIODS[3])?;

    if ema200 < ema72 && ema72 < ema21 && ema21 < ema9 && last.close > ema9 {
        return Some(FanDirection::Bullish);
    }
    if ema200 > ema72 && ema72 > ema21 && ema21 > ema9 && last.close < ema9 {
        return Some(FanDirection::Bearish);
    }
    None
}

/// True when any of the last `lookback` closes sits within `tolerance`
/// relative distance of EMA(`period`). The EMA is computed once over the
/// full window, not per close.
pub fn touched_ema(candles: &[Candle], period: usize, lookback: usize, tolerance: f64) -> bool {
    let Some(ema_val) = ema(candles, period) else {
        return false;
    };
    if ema_val == 0.0 {
        return false;
    }
    let tail_start = candles.len().saturating_sub(lookback);
    candles[tail_start..]
        .iter()
        .any(|c| ((c.close - ema_val) / ema_val).abs() < tolerance)
}
