use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV bar for a symbol over an implicit time bucket.
///
/// Windows are ordered ascending by `time`; the ingestion collaborator owns
/// the window and caps its length (historically 500 bars).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    pub symbol: String,
    pub time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(
        symbol: impl Into<String>,
        time: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Candle body as a fraction of its full range. Range is guarded with a
    /// small epsilon so a doji with high == low does not divide by zero.
    pub fn body_ratio(&self) -> f64 {
        (self.close - self.open).abs() / (self.high - self.low + 1e-9)
    }

    pub fn is_up(&self) -> bool {
        self.close > self.open
    }

    pub fn is_down(&self) -> bool {
        self.close < self.open
    }
}
