//! Per-evaluation context supplied by the host.
//!
//! Every recognized option is enumerated here with an explicit neutral
//! default; the engine never fails on a missing field, it substitutes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::candle::Candle;

/// Neutral fear-index level assumed when the host supplies none.
pub const DEFAULT_VIX: f64 = 20.0;

/// One macro-news headline from the aggregator collaborator.
///
/// Items arrive deduplicated and sorted by recency; the engine only reads
/// the title and publish time. Items without a publish time are ignored by
/// the news-penalty scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub symbols: Vec<String>,
}

/// Higher-timeframe bar sets used by trend alignment. Daily is preferred
/// over weekly when both are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HigherTimeframes {
    pub daily: Option<Vec<Candle>>,
    pub weekly: Option<Vec<Candle>>,
}

impl HigherTimeframes {
    /// The bar set trend alignment will look at, daily first.
    pub fn preferred(&self) -> Option<&[Candle]> {
        self.daily
            .as_deref()
            .or(self.weekly.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvalContext {
    /// Advisory label of the evaluation timeframe ("5m", "15m", ...).
    pub timeframe: Option<String>,
    pub higher: HigherTimeframes,
    pub news: Vec<NewsItem>,
    /// Advisory trading-session label; no modifier consumes it today.
    pub session: Option<String>,
    /// Global fear index. Values above the configured threshold gate
    /// confidence down.
    pub vix: Option<f64>,
    /// Cross-asset correlation factor per symbol, expected in [0, 1].
    pub correlated: HashMap<String, f64>,
}

impl EvalContext {
    pub fn vix(&self) -> f64 {
        self.vix.unwrap_or(DEFAULT_VIX)
    }

    /// Correlation dampening factor for a symbol, clamped into [0, 1].
    /// Unknown symbols and out-of-range host values degrade to neutral.
    pub fn correlation_for(&self, symbol: &str) -> f64 {
        self.correlated
            .get(symbol)
            .copied()
            .unwrap_or(0.0)
            .clamp(0.0, 1.0)
    }
}
