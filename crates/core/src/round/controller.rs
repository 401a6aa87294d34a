use chrono::Duration;
use log::{debug, info, warn};
use thiserror::Error;

use crate::model::{Card, Deck, RoundSettings};
use crate::round::{AnswerState, RoundSummary};
use crate::time::saturating_remaining;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("round duration must be positive, got {millis}ms")]
    InvalidConfiguration { millis: i64 },

    #[error("card index {index} is out of range for a deck of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("card {index} has already been answered")]
    AlreadyAnswered { index: usize },

    #[error("an answer must be either correct or incorrect")]
    InvalidAnswer,

    #[error("round time has expired")]
    RoundExpired,
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Externally observable phase of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// No round has been started yet.
    Idle,
    Active,
    Paused,
    /// Terminal: time ran out, or the deck had no cards. Only `reset` or `start` leave it.
    Expired,
}

/// Mutable state of one round.
///
/// `answers` has exactly one entry per deck card. `cursor` is the lowest unanswered
/// index, or `None` once no card is left to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundState {
    answers: Vec<AnswerState>,
    cursor: Option<usize>,
    remaining: Duration,
    active: bool,
    expired: bool,
}

impl RoundState {
    fn fresh(deck: &Deck, duration: Duration, active: bool) -> Self {
        if deck.is_empty() {
            return Self {
                answers: Vec::new(),
                cursor: None,
                remaining: duration,
                active: false,
                expired: true,
            };
        }

        Self {
            answers: vec![AnswerState::Unanswered; deck.len()],
            cursor: Some(0),
            remaining: duration,
            active,
            expired: false,
        }
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerState] {
        &self.answers
    }

    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    fn advance_cursor(&mut self) {
        let from = self.cursor.unwrap_or(0);
        self.cursor = self.answers[from..]
            .iter()
            .position(|answer| !answer.is_answered())
            .map(|offset| from + offset);
    }
}

#[derive(Clone, Debug)]
struct Round {
    deck: Deck,
    duration: Duration,
    starts_active: bool,
    state: RoundState,
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Drives a single timed round over a fixed deck.
///
/// The controller owns no clock: time only moves when `tick` is called with the
/// elapsed duration. Every mutating call either applies fully or returns an error
/// and leaves the round untouched. Access must be serialized by the caller.
#[derive(Clone, Debug, Default)]
pub struct RoundController {
    round: Option<Round>,
}

impl RoundController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a round with the clock running.
    ///
    /// An empty deck is not an error: the round goes straight to `Expired` and
    /// `is_deck_empty` reports why.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::InvalidConfiguration` if `duration` is not positive.
    pub fn start(&mut self, deck: Deck, duration: Duration) -> Result<(), RoundError> {
        self.begin(deck, duration, true)
    }

    /// Start a round with the clock stopped; `resume` starts it.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::InvalidConfiguration` if `duration` is not positive.
    pub fn start_paused(&mut self, deck: Deck, duration: Duration) -> Result<(), RoundError> {
        self.begin(deck, duration, false)
    }

    /// Start a round using validated settings.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::InvalidConfiguration` if the settings carry a non-positive duration.
    pub fn start_with(&mut self, deck: Deck, settings: &RoundSettings) -> Result<(), RoundError> {
        self.begin(deck, settings.duration(), !settings.start_paused())
    }

    fn begin(&mut self, deck: Deck, duration: Duration, active: bool) -> Result<(), RoundError> {
        if duration <= Duration::zero() {
            warn!("rejected round start with non-positive duration {duration}");
            return Err(RoundError::InvalidConfiguration {
                millis: duration.num_milliseconds(),
            });
        }

        let state = RoundState::fresh(&deck, duration, active);
        if deck.is_empty() {
            info!("deck {} has no cards; round ends immediately", deck.id());
        } else {
            debug!(
                "round started: deck={} cards={} duration={duration} active={active}",
                deck.id(),
                deck.len()
            );
        }

        self.round = Some(Round {
            deck,
            duration,
            starts_active: active,
            state,
        });
        Ok(())
    }

    /// Advance the round clock by `elapsed`.
    ///
    /// Ignored while paused, expired, idle, or for zero/negative `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        let state = &mut round.state;
        if !state.active || state.expired || elapsed <= Duration::zero() {
            return;
        }

        state.remaining = saturating_remaining(state.remaining, elapsed);
        if state.remaining.is_zero() {
            state.active = false;
            state.expired = true;
            info!("round time expired for deck {}", round.deck.id());
        }
    }

    /// Stop the clock. Idempotent; no effect once expired.
    pub fn pause(&mut self) {
        if let Some(round) = self.round.as_mut() {
            if !round.state.expired && round.state.active {
                round.state.active = false;
                debug!("round paused");
            }
        }
    }

    /// Restart the clock. No effect once expired or when the deck is empty.
    pub fn resume(&mut self) {
        if let Some(round) = self.round.as_mut() {
            if !round.state.expired && !round.deck.is_empty() && !round.state.active {
                round.state.active = true;
                debug!("round resumed");
            }
        }
    }

    /// Record an answer for the card at `index` and move the cursor on.
    ///
    /// Any card that is still unanswered may be answered, including while paused.
    /// Returns the new cursor; `None` means every card has been answered.
    ///
    /// # Errors
    ///
    /// - `RoundError::InvalidAnswer` if `answer` is `Unanswered`
    /// - `RoundError::IndexOutOfRange` if `index` is not a card of the deck
    /// - `RoundError::RoundExpired` if the round is over
    /// - `RoundError::AlreadyAnswered` if the card already has an answer
    pub fn record_answer(
        &mut self,
        answer: AnswerState,
        index: usize,
    ) -> Result<Option<usize>, RoundError> {
        if !answer.is_answered() {
            return Err(RoundError::InvalidAnswer);
        }
        let Some(round) = self.round.as_mut() else {
            return Err(RoundError::IndexOutOfRange { index, len: 0 });
        };
        let state = &mut round.state;

        let len = state.answers.len();
        if index >= len {
            return Err(RoundError::IndexOutOfRange { index, len });
        }
        if state.expired {
            return Err(RoundError::RoundExpired);
        }
        if state.answers[index].is_answered() {
            return Err(RoundError::AlreadyAnswered { index });
        }

        state.answers[index] = answer;
        state.advance_cursor();
        debug!(
            "recorded {answer:?} for card {index}; cursor now {:?}",
            state.cursor
        );
        Ok(state.cursor)
    }

    /// Reinitialize the round from its original deck and duration.
    ///
    /// The clock is running afterwards exactly when it was running right after
    /// the last start. Does nothing before the first start.
    pub fn reset(&mut self) {
        if let Some(round) = self.round.as_mut() {
            round.state = RoundState::fresh(&round.deck, round.duration, round.starts_active);
            debug!("round reset for deck {}", round.deck.id());
        }
    }

    /// Answer counts over the whole deck.
    #[must_use]
    pub fn summary(&self) -> RoundSummary {
        self.round
            .as_ref()
            .map_or_else(RoundSummary::default, |round| {
                RoundSummary::from_answers(&round.state.answers)
            })
    }

    // Projections

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        match self.round.as_ref().map(|round| &round.state) {
            None => RoundPhase::Idle,
            Some(state) if state.expired => RoundPhase::Expired,
            Some(state) if state.active => RoundPhase::Active,
            Some(_) => RoundPhase::Paused,
        }
    }

    #[must_use]
    pub fn state(&self) -> Option<&RoundState> {
        self.round.as_ref().map(|round| &round.state)
    }

    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        self.round.as_ref().map(|round| &round.deck)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state().is_some_and(RoundState::is_active)
    }

    /// True when the round is over, whether time ran out or the deck was empty.
    #[must_use]
    pub fn is_time_expired(&self) -> bool {
        self.state().is_some_and(RoundState::is_expired)
    }

    /// True when the round was started with a deck that has no cards.
    #[must_use]
    pub fn is_deck_empty(&self) -> bool {
        self.deck().is_some_and(Deck::is_empty)
    }

    /// True when a non-empty deck has every card answered.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.round
            .as_ref()
            .is_some_and(|round| !round.deck.is_empty() && round.state.cursor.is_none())
    }

    #[must_use]
    pub fn time_remaining(&self) -> Duration {
        self.state().map_or(Duration::zero(), RoundState::remaining)
    }

    /// Configured length of the current round.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.round.as_ref().map(|round| round.duration)
    }

    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.state().and_then(RoundState::cursor)
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        let round = self.round.as_ref()?;
        round.state.cursor.and_then(|index| round.deck.get(index))
    }

    #[must_use]
    pub fn answer_state(&self, index: usize) -> Option<AnswerState> {
        self.state()
            .and_then(|state| state.answers.get(index).copied())
    }

    /// Unanswered cards with their deck index, starting at the cursor.
    pub fn visible_cards(&self) -> impl Iterator<Item = (usize, &Card)> + '_ {
        self.round.iter().flat_map(|round| {
            round
                .deck
                .cards()
                .iter()
                .enumerate()
                .filter(move |(index, _)| !round.state.answers[*index].is_answered())
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
