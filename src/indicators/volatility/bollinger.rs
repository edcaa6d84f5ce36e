//! Bollinger Bands indicator.
//!
//! Middle = SMA(period); upper/lower = middle +/- std_dev multiples of the
//! population standard deviation over the same window.

use crate::common::math;
use crate::models::candle::Candle;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

pub fn bollinger_bands(candles: &[Candle], period: usize, std_dev: f64) -> Option<BollingerBands> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let middle = math::sma(&closes, period)?;
    let sd = math::standard_deviation(&closes, period)?;
    Some(BollingerBands {
        upper: middle + std_dev * sd,
        middle,
        lower: middle - std_dev * sd,
    })
}

/// Bands with the conventional parameters (20-bar SMA, 2 sigma).
pub fn bollinger_bands_default(candles: &[Candle]) -> Option<BollingerBands> {
    bollinger_bands(candles, 20, 2.0)
}
