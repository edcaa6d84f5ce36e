//! Range-breakout detector with volume confirmation.

use crate::indicators::volume::SpikeDirection;
use crate::models::candle::Candle;

pub const BREAKOUT_LOOKBACK: usize = 20;
pub const BREAKOUT_VOLUME_FACTOR: f64 = 1.2;

/// Compares the latest close and volume against the max high, min low and
/// mean volume of the preceding `lookback` bars (latest excluded).
/// Up-breakout: close above the prior max high with volume above 1.2x the
/// prior mean. Down is symmetric. `None` with fewer than `lookback + 1`
/// bars or no break.
pub fn breakout(candles: &[Candle], lookback: usize) -> Option<SpikeDirection> {
    if lookback == 0 || candles.len() < lookback + 1 {
        return None;
    }
    let prior = &candles[candles.len() - 1 - lookback..candles.len() - 1];
    let max_high = prior.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let min_low = prior.iter().map(|c| c.low).fold(f64::MAX, f64::min);
    let avg_vol = prior.iter().map(|c| c.volume).sum::<f64>() / lookback as f64;

    let last = candles.last()?;
    if last.close > max_high && last.volume > avg_vol * BREAKOUT_VOLUME_FACTOR {
        return Some(SpikeDirection::Up);
    }
    if last.close < min_low && last.volume > avg_vol * BREAKOUT_VOLUME_FACTOR {
        return Some(SpikeDirection::Down);
    }
    None
}

pub fn breakout_default(candles: &[Candle]) -> Option<SpikeDirection> {
    breakout(candles, BREAKOUT_LOOKBACK)
}
