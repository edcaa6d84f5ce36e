pub mod ema;
pub mod sma;

pub use ema::{ema, ema_fan, touched_ema, FanDirection, FAN_PERIODS};
pub use sma::sma;
