pub mod macd;
pub mod rsi;

pub use macd::{macd_cross, macd_cross_default, macd_line, macd_signal_line, MacdCross};
pub use rsi::{rsi, rsi_default};
