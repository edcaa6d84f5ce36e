//! Close-range volatility: max-min spread of recent closes. Read by the
//! transport collaborator for its per-symbol volatility feed; no strategy
//! consumes it.

use crate::models::candle::Candle;

/// Spread between the highest and lowest close of the last `period` bars.
/// Returns 0.0 for windows of fewer than 2 bars.
pub fn close_range(candles: &[Candle], period: usize) -> f64 {
    if candles.len() < 2 {
        return 0.0;
    }
    let tail_start = candles.len().saturating_sub(period);
    let closes = candles[tail_start..].iter().map(|c| c.close);
    let mut max = f64::MIN;
    let mut min = f64::MAX;
    for close in closes {
        max = max.max(close);
        min = min.min(close);
    }
    max - min
}
