//! Strategy definitions and the per-cycle candidate sweep.

pub mod generator;
pub mod weights;

pub use generator::CandidateGenerator;
pub use weights::{StrategyKind, MAX_WEIGHT};
