//! Volume-spike detector: latest volume against the 10-bar mean.

use crate::models::candle::Candle;

pub const SPIKE_WINDOW: usize = 10;
pub const SPIKE_FACTOR: f64 = 1.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpikeDirection {
    Up,
    Down,
}

/// Flags a spike when the latest bar's volume exceeds 1.8x the mean volume
/// of the last 10 bars (latest included). Direction follows the latest
/// bar's body. `None` with fewer than 10 bars or no spike.
pub fn volume_spike(candles: &[Candle]) -> Option<SpikeDirection> {
    if candles.len() < SPIKE_WINDOW {
        return None;
    }
    let window = &candles[candles.len() - SPIKE_WINDOW..];
    let avg = window.iter().map(|c| c.volume).sum::<f64>() / SPIKE_WINDOW as f64;
    let last = window.last()?;
    if last.volume > avg * SPIKE_FACTOR {
        Some(if last.close > last.open {
            SpikeDirection::Up
        } else {
            SpikeDirection::Down
        })
    } else {
        None
    }
}
