use crate::round::AnswerState;

/// Answer counts for a round. The three counts always add up to the deck size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundSummary {
    pub correct: usize,
    pub incorrect: usize,
    pub unanswered: usize,
}

impl RoundSummary {
    #[must_use]
    pub fn from_answers(answers: &[AnswerState]) -> Self {
        answers
            .iter()
            .fold(Self::default(), |mut summary, answer| {
                match answer {
                    AnswerState::Correct => summary.correct += 1,
                    AnswerState::Incorrect => summary.incorrect += 1,
                    AnswerState::Unanswered => summary.unanswered += 1,
                }
                summary
            })
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.correct + self.incorrect + self.unanswered
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.correct + self.incorrect
    }
}
