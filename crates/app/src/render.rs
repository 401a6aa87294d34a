use services::{RoundObserver, RoundView, VisibleCard};

use flash_core::RoundPhase;

/// One-line clock and progress display.
#[must_use]
pub fn status_line(view: &RoundView) -> String {
    let state = match view.phase {
        RoundPhase::Idle => "not started",
        RoundPhase::Active => "running",
        RoundPhase::Paused => "paused",
        RoundPhase::Expired => "over",
    };
    format!(
        "[{}] {} | {} left in deck",
        view.time_remaining_text,
        state,
        view.visible_cards.len()
    )
}

#[must_use]
pub fn card_face(card: &VisibleCard) -> String {
    format!("#{}: {}", card.index + 1, card.prompt)
}

/// The whole screen for the current view.
#[must_use]
pub fn screen(view: &RoundView) -> String {
    if view.is_time_expired && !view.is_deck_empty {
        return summary_block(view);
    }
    if view.is_deck_empty {
        return "This deck has no cards. Add some and start again.".to_owned();
    }

    let mut out = status_line(view);
    if let Some(area) = card_area(view) {
        out.push('\n');
        out.push_str(&area);
    }
    out
}

/// What sits below the status line: the top card, or the restart prompt once the
/// deck is used up. `None` after expiry, when `TerminalObserver` shows the summary.
#[must_use]
pub fn card_area(view: &RoundView) -> Option<String> {
    if view.is_time_expired {
        return None;
    }
    Some(match view.current_card() {
        Some(card) => card_face(card),
        None => format!(
            "All cards answered. Type x to start again.\n{}",
            summary_counts(view)
        ),
    })
}

#[must_use]
pub fn summary_block(view: &RoundView) -> String {
    format!(
        "Your time has expired.\nRound Summary\n{}",
        summary_counts(view)
    )
}

fn summary_counts(view: &RoundView) -> String {
    format!(
        "  + {}\n  - {}\n  ? {}",
        view.correct_answer_count_text,
        view.incorrect_answer_count_text,
        view.unanswered_count_text
    )
}

/// Prints the clock whenever its text changes, and the summary when time runs out.
#[derive(Debug, Default)]
pub struct TerminalObserver {
    last_status: Option<String>,
    was_expired: bool,
}

impl RoundObserver for TerminalObserver {
    fn on_change(&mut self, view: &RoundView) {
        if view.is_time_expired {
            if !self.was_expired {
                println!("{}", screen(view));
            }
        } else {
            let status = status_line(view);
            if self.last_status.as_deref() != Some(status.as_str()) {
                println!("{status}");
                self.last_status = Some(status);
            }
        }
        self.was_expired = view.is_time_expired;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use flash_core::model::{CardDraft, CardId, Deck, DeckId};
    use flash_core::{AnswerState, RoundController};

    fn view_after(answers: &[(AnswerState, usize)], elapsed: i64) -> RoundView {
        let cards = (1..=2).map(|id| {
            CardDraft::new(format!("Q{id}"), format!("A{id}"))
                .validate(CardId::new(id))
                .unwrap()
        });
        let deck = Deck::with_cards(DeckId::new(1), "Render", cards).unwrap();
        let mut controller = RoundController::new();
        controller.start(deck, Duration::seconds(90)).unwrap();
        for (answer, index) in answers {
            controller.record_answer(*answer, *index).unwrap();
        }
        controller.tick(Duration::seconds(elapsed));
        RoundView::from_controller(&controller)
    }

    #[test]
    fn running_screen_shows_clock_and_top_card() {
        let view = view_after(&[], 5);
        assert_eq!(screen(&view), "[1:25] running | 2 left in deck\n#1: Q1");
    }

    #[test]
    fn expired_screen_shows_summary() {
        let view = view_after(&[(AnswerState::Correct, 0)], 90);
        assert_eq!(
            screen(&view),
            "Your time has expired.\nRound Summary\n  + 1 correct answer\n  - 0 incorrect answers\n  ? 1 unanswered card"
        );
    }

    #[test]
    fn card_area_leaves_the_status_line_to_the_observer() {
        let view = view_after(&[(AnswerState::Correct, 0)], 5);
        assert_eq!(card_area(&view).as_deref(), Some("#2: Q2"));
        assert!(!card_area(&view).unwrap().contains(&view.time_remaining_text));

        let expired = view_after(&[], 90);
        assert_eq!(card_area(&expired), None);
    }

    #[test]
    fn finished_deck_screen_offers_restart() {
        let view = view_after(&[(AnswerState::Correct, 0), (AnswerState::Incorrect, 1)], 1);
        assert!(screen(&view).starts_with("[1:29] running | 0 left in deck\nAll cards answered."));
    }
}
