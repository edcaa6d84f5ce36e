//! Shared window builders for the integration tests.
#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use signalforge::models::Candle;

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap()
}

/// Bars where open = high = low = close; volume constant. Enough for every
/// close-only indicator.
pub fn bars_from_closes(symbol: &str, closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            Candle::new(
                symbol,
                t0() + Duration::minutes(5 * i as i64),
                c,
                c,
                c,
                c,
                1_000.0,
            )
        })
        .collect()
}

/// A perfectly flat 30-bar window: O = H = L = C = 100, constant volume.
pub fn flat_window(symbol: &str) -> Vec<Candle> {
    bars_from_closes(symbol, &[100.0; 30])
}

/// 29 quiet bars around 100 (highs 100.05, lows 99.95, doji bodies), then a
/// closing bar that clears the prior 20-bar max high on twice the resting
/// volume. Fires the breakout (and the volume spike it implies).
pub fn breakout_buy_window(symbol: &str) -> Vec<Candle> {
    let mut candles: Vec<Candle> = (0..29)
        .map(|i| {
            Candle::new(
                symbol,
                t0() + Duration::minutes(5 * i),
                100.0,
                100.05,
                99.95,
                100.0,
                1_000.0,
            )
        })
        .collect();
    candles.push(Candle::new(
        symbol,
        t0() + Duration::minutes(5 * 29),
        100.5,
        103.5,
        100.0,
        103.0,
        2_000.0,
    ));
    candles
}

/// Mirror of `breakout_buy_window`: the last close falls through the prior
/// 20-bar min low on twice the resting volume.
pub fn breakout_sell_window(symbol: &str) -> Vec<Candle> {
    let mut candles: Vec<Candle> = (0..29)
        .map(|i| {
            Candle::new(
                symbol,
                t0() + Duration::minutes(5 * i),
                100.0,
                100.05,
                99.95,
                100.0,
                1_000.0,
            )
        })
        .collect();
    candles.push(Candle::new(
        symbol,
        t0() + Duration::minutes(5 * 29),
        100.2,
        100.3,
        96.8,
        97.0,
        2_000.0,
    ));
    candles
}

/// A window whose final bar satisfies the scalp pattern: volume stepped up
/// 1.6x over the previous bar, decisive body, RSI(6) in the tradable band.
/// The alternating closes keep every oscillator mid-range.
pub fn scalp_buy_window(symbol: &str) -> Vec<Candle> {
    let mut candles: Vec<Candle> = (0..29)
        .map(|i| {
            let close = if i % 2 == 0 { 100.0 } else { 100.2 };
            Candle::new(
                symbol,
                t0() + Duration::minutes(5 * i),
                close,
                close + 0.05,
                close - 0.05,
                close,
                1_000.0,
            )
        })
        .collect();
    candles.push(Candle::new(
        symbol,
        t0() + Duration::minutes(5 * 29),
        100.05,
        100.55,
        100.0,
        100.5,
        1_600.0,
    ));
    candles
}

/// A steadily rising 250-bar ramp; every fan EMA is defined and ordered
/// bullishly, and EMA(72) sits above EMA(200).
pub fn rising_ramp(symbol: &str, bars: usize) -> Vec<Candle> {
    (0..bars)
        .map(|i| {
            let close = 100.0 + i as f64;
            Candle::new(
                symbol,
                t0() + Duration::minutes(5 * i as i64),
                close - 0.5,
                close + 0.5,
                close - 1.0,
                close,
                1_000.0,
            )
        })
        .collect()
}
