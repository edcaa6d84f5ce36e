//! signalforge: a multi-strategy technical-signal engine.
//!
//! Consumes a rolling window of OHLCV bars per symbol plus an evaluation
//! context (news, higher-timeframe bars, fear index, correlations) and
//! decides whether to emit a directional signal, at what confidence, under
//! per-symbol cooldowns and a daily scalp cap. The engine is a deterministic
//! rule evaluator: pure, synchronous, no I/O. Ingestion, news aggregation
//! and transport are external collaborators exchanging the serde models in
//! [`models`].

pub mod common;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod signals;
pub mod strategies;

pub use config::{ConfigError, EngineConfig};
pub use models::{Candle, EmittedSignal, EvalContext, HigherTimeframes, NewsItem, Side};
pub use signals::{CooldownStatus, EngineState, SignalEngine, MIN_CANDLES};
pub use strategies::{StrategyKind, MAX_WEIGHT};
