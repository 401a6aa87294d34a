#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod round;
pub mod time;

pub use error::Error;
pub use round::{AnswerState, RoundController, RoundError, RoundPhase, RoundState, RoundSummary};
