use chrono::Duration;

use flash_core::model::{Card, CardId};
use flash_core::{RoundController, RoundPhase, RoundSummary};

use crate::time_fmt::format_remaining;

/// A card the presentation layer may show, with its index in the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleCard {
    pub index: usize,
    pub id: CardId,
    pub prompt: String,
    pub answer: String,
}

impl VisibleCard {
    fn new(index: usize, card: &Card) -> Self {
        Self {
            index,
            id: card.id(),
            prompt: card.prompt().as_str().to_owned(),
            answer: card.answer().as_str().to_owned(),
        }
    }
}

/// Read-only snapshot of a round, shaped for a card-deck screen.
///
/// Card display is suppressed once time has expired; the screen shows the
/// summary texts instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub phase: RoundPhase,
    pub visible_cards: Vec<VisibleCard>,
    pub summary: RoundSummary,
    pub correct_answer_count_text: String,
    pub incorrect_answer_count_text: String,
    pub unanswered_count_text: String,
    pub is_deck_empty: bool,
    pub is_time_expired: bool,
    pub is_exhausted: bool,
    pub time_remaining: Duration,
    pub time_remaining_text: String,
}

impl RoundView {
    #[must_use]
    pub fn from_controller(controller: &RoundController) -> Self {
        let summary = controller.summary();
        let is_time_expired = controller.is_time_expired();
        let visible_cards = if is_time_expired {
            Vec::new()
        } else {
            controller
                .visible_cards()
                .map(|(index, card)| VisibleCard::new(index, card))
                .collect()
        };
        let time_remaining = controller.time_remaining();

        Self {
            phase: controller.phase(),
            visible_cards,
            summary,
            correct_answer_count_text: count_text(summary.correct, "correct answer"),
            incorrect_answer_count_text: count_text(summary.incorrect, "incorrect answer"),
            unanswered_count_text: count_text(summary.unanswered, "unanswered card"),
            is_deck_empty: controller.is_deck_empty(),
            is_time_expired,
            is_exhausted: controller.is_exhausted(),
            time_remaining,
            time_remaining_text: format_remaining(time_remaining),
        }
    }

    /// The card on top of the visible stack.
    #[must_use]
    pub fn current_card(&self) -> Option<&VisibleCard> {
        self.visible_cards.first()
    }

    /// Whether the screen should offer "start again" rather than deck editing.
    #[must_use]
    pub fn shows_reset(&self) -> bool {
        self.is_deck_empty || self.is_time_expired || self.is_exhausted
    }
}

fn count_text(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flash_core::AnswerState;
    use flash_core::model::{CardDraft, Deck, DeckId};

    fn controller(n: u64, secs: i64) -> RoundController {
        let cards = (1..=n).map(|id| {
            CardDraft::new(format!("Q{id}"), format!("A{id}"))
                .validate(CardId::new(id))
                .unwrap()
        });
        let deck = Deck::with_cards(DeckId::new(1), "View", cards).unwrap();
        let mut controller = RoundController::new();
        controller.start(deck, Duration::seconds(secs)).unwrap();
        controller
    }

    #[test]
    fn count_texts_use_singular_and_plural() {
        let mut controller = controller(3, 60);
        controller.record_answer(AnswerState::Correct, 0).unwrap();

        let view = RoundView::from_controller(&controller);
        assert_eq!(view.correct_answer_count_text, "1 correct answer");
        assert_eq!(view.incorrect_answer_count_text, "0 incorrect answers");
        assert_eq!(view.unanswered_count_text, "2 unanswered cards");
    }

    #[test]
    fn running_round_shows_cards_and_clock() {
        let mut controller = controller(2, 75);
        controller.tick(Duration::milliseconds(500));

        let view = RoundView::from_controller(&controller);
        assert_eq!(view.phase, RoundPhase::Active);
        assert_eq!(view.visible_cards.len(), 2);
        assert_eq!(view.current_card().unwrap().prompt, "Q1");
        assert_eq!(view.time_remaining_text, "1:15");
        assert!(!view.shows_reset());
    }

    #[test]
    fn expired_round_hides_cards() {
        let mut controller = controller(2, 10);
        controller.tick(Duration::seconds(10));

        let view = RoundView::from_controller(&controller);
        assert!(view.is_time_expired);
        assert!(view.visible_cards.is_empty());
        assert_eq!(view.time_remaining_text, "0:00");
        assert_eq!(view.unanswered_count_text, "2 unanswered cards");
        assert!(view.shows_reset());
    }

    #[test]
    fn exhausted_round_offers_reset() {
        let mut controller = controller(1, 10);
        controller.record_answer(AnswerState::Incorrect, 0).unwrap();

        let view = RoundView::from_controller(&controller);
        assert!(view.is_exhausted);
        assert!(!view.is_time_expired);
        assert!(view.current_card().is_none());
        assert!(view.shows_reset());
    }

    #[test]
    fn longest_round_still_renders_a_clock() {
        let cards = (1..=2).map(|id| {
            CardDraft::new(format!("Q{id}"), format!("A{id}"))
                .validate(CardId::new(id))
                .unwrap()
        });
        let deck = Deck::with_cards(DeckId::new(1), "View", cards).unwrap();
        let mut controller = RoundController::new();
        controller.start(deck, Duration::MAX).unwrap();

        let view = RoundView::from_controller(&controller);
        assert_eq!(view.time_remaining, Duration::MAX);
        assert!(!view.time_remaining_text.starts_with('-'));
        assert!(view.time_remaining_text.ends_with(":55"));
    }

    #[test]
    fn idle_controller_has_empty_view() {
        let view = RoundView::from_controller(&RoundController::new());
        assert_eq!(view.phase, RoundPhase::Idle);
        assert!(view.visible_cards.is_empty());
        assert_eq!(view.summary, RoundSummary::default());
        assert!(!view.shows_reset());
    }
}
