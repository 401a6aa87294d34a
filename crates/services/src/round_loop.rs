use std::fmt;

use chrono::Duration;
use log::{debug, info};

use flash_core::model::{Deck, RoundSettings, RoundSettingsDraft};
use flash_core::{AnswerState, RoundController, RoundSummary};

use crate::error::RoundServiceError;
use crate::round_view::RoundView;

/// Something the card-deck screen asks the round to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// Time measured by the host's timer since the previous tick.
    Tick(Duration),
    CardAnswered { answer: AnswerState, index: usize },
    PauseRequested,
    ResumeRequested,
    ResetRequested,
    /// The deck editor is about to be shown.
    EditDeckRequested,
    /// The deck editor closed; the round restarts with the edited deck.
    EditDeckCompleted(Deck),
    /// The settings screen is about to be shown.
    SettingsRequested,
    /// The settings screen closed, possibly with new settings for the next start.
    SettingsDismissed(Option<RoundSettingsDraft>),
    Appeared,
    Disappeared,
}

/// Receives round snapshots after every successful event.
pub trait RoundObserver {
    fn on_change(&mut self, view: &RoundView);

    /// Called once each time the round enters the expired phase.
    fn on_expired(&mut self, summary: &RoundSummary) {
        let _ = summary;
    }
}

impl<F> RoundObserver for F
where
    F: FnMut(&RoundView),
{
    fn on_change(&mut self, view: &RoundView) {
        self(view);
    }
}

/// Routes screen events into a `RoundController` and publishes the resulting views.
pub struct RoundLoopService {
    controller: RoundController,
    settings: RoundSettings,
    observers: Vec<Box<dyn RoundObserver + Send>>,
}

impl RoundLoopService {
    #[must_use]
    pub fn new(settings: RoundSettings) -> Self {
        Self {
            controller: RoundController::new(),
            settings,
            observers: Vec::new(),
        }
    }

    /// Register an observer; it sees every later change.
    pub fn subscribe(&mut self, observer: impl RoundObserver + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[must_use]
    pub fn controller(&self) -> &RoundController {
        &self.controller
    }

    #[must_use]
    pub fn settings(&self) -> &RoundSettings {
        &self.settings
    }

    #[must_use]
    pub fn view(&self) -> RoundView {
        RoundView::from_controller(&self.controller)
    }

    /// Start a round over `deck` with the current settings.
    ///
    /// # Errors
    ///
    /// Returns `RoundServiceError::Round` if the controller rejects the configuration.
    pub fn start(&mut self, deck: Deck) -> Result<RoundView, RoundServiceError> {
        self.controller.start_with(deck, &self.settings)?;
        Ok(self.publish(false))
    }

    /// Apply one event and publish the new view.
    ///
    /// Observers are only notified when the event was applied.
    ///
    /// # Errors
    ///
    /// Returns `RoundServiceError::Round` for rejected answers or restarts and
    /// `RoundServiceError::Settings` for invalid settings drafts.
    pub fn handle(&mut self, event: RoundEvent) -> Result<RoundView, RoundServiceError> {
        // A restarted round can expire again even if the previous one had.
        let was_expired = match event {
            RoundEvent::ResetRequested | RoundEvent::EditDeckCompleted(_) => false,
            _ => self.controller.is_time_expired(),
        };

        match event {
            RoundEvent::Tick(elapsed) => self.controller.tick(elapsed),
            RoundEvent::CardAnswered { answer, index } => {
                self.controller.record_answer(answer, index)?;
            }
            RoundEvent::PauseRequested
            | RoundEvent::EditDeckRequested
            | RoundEvent::SettingsRequested
            | RoundEvent::Disappeared => self.controller.pause(),
            RoundEvent::ResumeRequested | RoundEvent::Appeared => self.controller.resume(),
            RoundEvent::ResetRequested => self.controller.reset(),
            RoundEvent::EditDeckCompleted(deck) => {
                debug!("deck edited; restarting with {} cards", deck.len());
                self.controller.start_with(deck, &self.settings)?;
            }
            RoundEvent::SettingsDismissed(draft) => {
                if let Some(draft) = draft {
                    self.settings = draft.validate()?;
                    debug!("round settings updated: {:?}", self.settings);
                }
                self.controller.resume();
            }
        }

        Ok(self.publish(was_expired))
    }

    fn publish(&mut self, was_expired: bool) -> RoundView {
        let view = self.view();
        for observer in &mut self.observers {
            observer.on_change(&view);
        }

        if !was_expired && view.is_time_expired {
            info!(
                "round over: {} correct, {} incorrect, {} unanswered",
                view.summary.correct, view.summary.incorrect, view.summary.unanswered
            );
            for observer in &mut self.observers {
                observer.on_expired(&view.summary);
            }
        }
        view
    }
}

impl fmt::Debug for RoundLoopService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundLoopService")
            .field("controller", &self.controller)
            .field("settings", &self.settings)
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
