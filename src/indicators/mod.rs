//! Pure indicator functions over a bar window. No state, no I/O; a window
//! too short for an indicator yields `None`, never a panic.

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;
