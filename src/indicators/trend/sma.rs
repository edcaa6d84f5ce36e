//! SMA (Simple Moving Average) over candle closes.

use crate::common::math;
use crate::models::candle::Candle;

/// Arithmetic mean of the last `period` closes. `None` with fewer bars.
pub fn sma(candles: &[Candle], period: usize) -> Option<f64> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::sma(&closes, period)
}
