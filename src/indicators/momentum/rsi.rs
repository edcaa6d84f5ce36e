//! RSI (Relative Strength Index) indicator.
//!
//! RSI = 100 - (100 / (1 + RS)), RS = sum of gains / sum of losses over the
//! last `period` one-bar deltas. The loss divisor is substituted with 1 only
//! when it is exactly zero; fractional losses divide as-is.

use crate::models::candle::Candle;

/// RSI over the last `period` deltas. Requires `period + 1` bars.
///
/// A window with no price movement at all (zero gains and zero losses)
/// returns `None`: there is no momentum to read, and a hard 0 would be
/// indistinguishable from a fully oversold market.
pub fn rsi(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 || candles.len() < period + 1 {
        return None;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in candles.len() - period..candles.len() {
        let diff = candles[i].close - candles[i - 1].close;
        if diff >= 0.0 {
            gains += diff;
        } else {
            losses -= diff;
        }
    }

    if gains == 0.0 && losses == 0.0 {
        return None;
    }

    let rs = gains / if losses == 0.0 { 1.0 } else { losses };
    Some(100.0 - 100.0 / (1.0 + rs))
}

/// RSI with the conventional 14-bar period.
pub fn rsi_default(candles: &[Candle]) -> Option<f64> {
    rsi(candles, 14)
}
