//! Shared data models spanning the engine layers.

pub mod candle;
pub mod context;
pub mod signal;

pub use candle::Candle;
pub use context::{EvalContext, HigherTimeframes, NewsItem, DEFAULT_VIX};
pub use signal::{EmittedSignal, ScoredCandidate, Side, SignalCandidate, SIGNAL_EXPIRE_SECS};
