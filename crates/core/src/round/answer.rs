use serde::{Deserialize, Serialize};

/// How a card was answered during the current round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerState {
    #[default]
    Unanswered,
    Correct,
    Incorrect,
}

impl AnswerState {
    #[must_use]
    pub fn is_answered(self) -> bool {
        !matches!(self, Self::Unanswered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unanswered_is_open() {
        assert!(!AnswerState::Unanswered.is_answered());
        assert!(AnswerState::Correct.is_answered());
        assert!(AnswerState::Incorrect.is_answered());
        assert_eq!(AnswerState::default(), AnswerState::Unanswered);
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&AnswerState::Incorrect).unwrap();
        assert_eq!(json, "\"incorrect\"");
    }
}
