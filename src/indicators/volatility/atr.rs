//! ATR (Average True Range). Only consumed by signal assembly to place the
//! stop and take-profit levels on an emitted signal.

use crate::models::candle::Candle;

pub const ATR_PERIOD: usize = 14;

/// Mean of the last `period` true ranges. Requires `period + 1` bars so
/// every range can look at its previous close.
pub fn atr(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 || candles.len() < period + 1 {
        return None;
    }
    let mut sum = 0.0;
    for i in candles.len() - period..candles.len() {
        let c = &candles[i];
        let prev_close = candles[i - 1].close;
        let tr = (c.high - c.low)
            .max((c.high - prev_close).abs())
            .max((c.low - prev_close).abs());
        sum += tr;
    }
    Some(sum / period as f64)
}
