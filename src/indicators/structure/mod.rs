pub mod breakout;
pub mod scalp;

pub use breakout::{breakout, breakout_default, BREAKOUT_LOOKBACK, BREAKOUT_VOLUME_FACTOR};
pub use scalp::{scalp_pattern, SCALP_BODY_RATIO, SCALP_MIN_BARS, SCALP_RSI_PERIOD, SCALP_VOLUME_STEP};
