//! Synthetic schedule generation: sampling parameters, probability catalog,
//! and the generator itself.

pub mod generator;
pub mod params;
pub mod probability;

pub use generator::Generator;
pub use params::{RawScheduleParams, ScheduleParams};
pub use probability::{Features, ProbabilityZone, TerminalWeights};
