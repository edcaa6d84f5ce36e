//! MACD (Moving Average Convergence Divergence) cross detector.
//!
//! MACD line = EMA(fast) - EMA(slow) over the full window. The signal line
//! is an EMA over the tail of the MACD-line series, where that series is
//! rebuilt by recomputing the line at every window prefix. Quadratic in the
//! window length, which is acceptable at the 500-bar cap the ingestion side
//! enforces; kept in this literal form so the numbers match the production
//! series exactly.

use crate::common::math;
use crate::models::candle::Candle;

pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacdCross {
    Buy,
    Sell,
}

/// MACD line at the full window: EMA(fast) - EMA(slow).
pub fn macd_line(candles: &[Candle], fast: usize, slow: usize) -> Option<f64> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let ema_fast = math::ema(&closes, fast)?;
    let ema_slow = math::ema(&closes, slow)?;
    Some(ema_fast - ema_slow)
}

/// Signal line: EMA(`signal_period`) over the MACD-line values of every
/// window prefix long enough to define both EMAs.
pub fn macd_signal_line(
    candles: &[Candle],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> Option<f64> {
    if candles.len() < slow + signal_period {
        return None;
    }
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let mut series = Vec::with_capacity(closes.len());
    for i in 0..closes.len() {
        let prefix = &closes[..=i];
        if let (Some(ef), Some(es)) = (math::ema(prefix, fast), math::ema(prefix, slow)) {
            series.push(ef - es);
        }
    }
    math::ema(&series, signal_period)
}

/// Buy when the MACD line is above its signal line, Sell when below,
/// `None` on equality or with fewer than `slow + signal` bars.
pub fn macd_cross(
    candles: &[Candle],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> Option<MacdCross> {
    if candles.len() < slow + signal_period {
        return None;
    }
    let line = macd_line(candles, fast, slow)?;
    let signal = macd_signal_line(candles, fast, slow, signal_period)?;
    if line > signal {
        Some(MacdCross::Buy)
    } else if line < signal {
        Some(MacdCross::Sell)
    } else {
        None
    }
}

/// MACD cross with the conventional 12/26/9 periods.
pub fn macd_cross_default(candles: &[Candle]) -> Option<MacdCross> {
    macd_cross(candles, MACD_FAST, MACD_SLOW, MACD_SIGNAL)
}
