pub mod atr;
pub mod bollinger;
pub mod range;

pub use atr::{atr, ATR_PERIOD};
pub use bollinger::{bollinger_bands, bollinger_bands_default, BollingerBands};
pub use range::close_range;
