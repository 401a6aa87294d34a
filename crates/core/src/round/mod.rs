//! Timed round over a fixed deck.
//!
//! The controller is driven entirely by its callers: an external timer feeds
//! `tick` with elapsed time and a presentation layer records answers.

mod answer;
mod controller;
mod summary;

pub use answer::AnswerState;
pub use controller::{RoundController, RoundError, RoundPhase, RoundState};
pub use summary::RoundSummary;
