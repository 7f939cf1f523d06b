#![forbid(unsafe_code)]

pub mod model;
pub mod round;
pub mod shuffle;

pub use round::{RoundPhase, RoundState};
pub use shuffle::Shuffler;
