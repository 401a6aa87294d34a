use std::sync::{Arc, Mutex};

use chrono::Duration;
use flash_core::model::{CardDraft, CardId, Deck, DeckId, RoundSettings};
use flash_core::{AnswerState, RoundPhase, RoundSummary};
use services::{RoundEvent, RoundLoopService, RoundObserver, RoundView};

fn capitals() -> Deck {
    let cards = [("France", "Paris"), ("Japan", "Tokyo"), ("Peru", "Lima")]
        .into_iter()
        .zip(1..)
        .map(|((prompt, answer), id)| {
            CardDraft::new(prompt, answer)
                .validate(CardId::new(id))
                .expect("valid card")
        });
    Deck::with_cards(DeckId::new(1), "Capitals", cards).expect("valid deck")
}

struct Summaries(Arc<Mutex<Vec<RoundSummary>>>);

impl RoundObserver for Summaries {
    fn on_change(&mut self, _view: &RoundView) {}

    fn on_expired(&mut self, summary: &RoundSummary) {
        self.0.lock().expect("lock").push(*summary);
    }
}

#[test]
fn timed_round_runs_to_summary() {
    let settings = RoundSettings::new(Duration::seconds(60), false).expect("settings");
    let mut svc = RoundLoopService::new(settings);
    let finished = Arc::new(Mutex::new(Vec::new()));
    svc.subscribe(Summaries(Arc::clone(&finished)));

    let view = svc.start(capitals()).expect("start");
    assert_eq!(view.phase, RoundPhase::Active);
    assert_eq!(view.current_card().expect("card").prompt, "France");

    let view = svc
        .handle(RoundEvent::CardAnswered {
            answer: AnswerState::Correct,
            index: 0,
        })
        .expect("answer");
    assert_eq!(view.current_card().expect("card").prompt, "Japan");

    svc.handle(RoundEvent::EditDeckRequested).expect("pause");
    svc.handle(RoundEvent::Tick(Duration::seconds(100)))
        .expect("tick while paused");
    assert_eq!(svc.controller().time_remaining(), Duration::seconds(60));

    svc.handle(RoundEvent::ResumeRequested).expect("resume");
    let view = svc
        .handle(RoundEvent::Tick(Duration::seconds(70)))
        .expect("tick");

    assert!(view.is_time_expired);
    assert!(view.shows_reset());
    assert_eq!(view.time_remaining_text, "0:00");
    assert_eq!(view.correct_answer_count_text, "1 correct answer");
    assert_eq!(view.incorrect_answer_count_text, "0 incorrect answers");
    assert_eq!(view.unanswered_count_text, "2 unanswered cards");
    assert_eq!(
        *finished.lock().expect("lock"),
        vec![RoundSummary {
            correct: 1,
            incorrect: 0,
            unanswered: 2,
        }]
    );

    let view = svc.handle(RoundEvent::ResetRequested).expect("reset");
    assert_eq!(view.phase, RoundPhase::Active);
    assert_eq!(view.visible_cards.len(), 3);
    assert_eq!(view.time_remaining_text, "1:00");
}

#[test]
fn empty_deck_round_is_over_immediately() {
    let mut svc = RoundLoopService::new(RoundSettings::default());
    let finished = Arc::new(Mutex::new(Vec::new()));
    svc.subscribe(Summaries(Arc::clone(&finished)));

    let view = svc
        .start(Deck::new(DeckId::new(9), "Empty").expect("deck"))
        .expect("start");

    assert!(view.is_deck_empty);
    assert!(view.is_time_expired);
    assert_eq!(view.summary, RoundSummary::default());
    assert_eq!(finished.lock().expect("lock").len(), 1);

    svc.handle(RoundEvent::ResumeRequested).expect("resume");
    assert_eq!(svc.controller().phase(), RoundPhase::Expired);
}
