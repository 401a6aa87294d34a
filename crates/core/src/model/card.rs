use thiserror::Error;

use crate::model::{
    ids::CardId,
    text::{AnswerText, PromptText, TextError},
};

//
// ─── CARD TYPES ────────────────────────────────────────────────────────────────
//

/// Unvalidated card content, as typed into the edit-deck screen or read from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub prompt: String,
    pub answer: String,
}

impl CardDraft {
    #[must_use]
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// Validate both sides and attach the identifier.
    ///
    /// # Errors
    ///
    /// Returns `CardValidationError` naming the side whose text is empty.
    pub fn validate(self, id: CardId) -> Result<Card, CardValidationError> {
        let prompt = PromptText::parse(self.prompt).map_err(CardValidationError::Prompt)?;
        let answer = AnswerText::parse(self.answer).map_err(CardValidationError::Answer)?;

        Ok(Card::new(id, prompt, answer))
    }
}

/// A flashcard: a prompt shown face up and the answer on its back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    prompt: PromptText,
    answer: AnswerText,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, prompt: PromptText, answer: AnswerText) -> Self {
        Self { id, prompt, answer }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &PromptText {
        &self.prompt
    }

    #[must_use]
    pub fn answer(&self) -> &AnswerText {
        &self.answer
    }
}

//
// ─── CARD VALIDATION ERRORS ────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardValidationError {
    #[error("invalid prompt: {0}")]
    Prompt(#[source] TextError),

    #[error("invalid answer: {0}")]
    Answer(#[source] TextError),
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
