pub mod spike;

pub use spike::{volume_spike, SpikeDirection, SPIKE_FACTOR, SPIKE_WINDOW};
