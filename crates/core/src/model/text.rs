use std::fmt;
use std::marker::PhantomData;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("text must not be empty")]
    Empty,
}

/// Non-empty card text, tagged with the side of the card it belongs to.
pub struct Text<Side>(String, PhantomData<Side>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer;

pub type PromptText = Text<Prompt>;
pub type AnswerText = Text<Answer>;

impl<Side> Text<Side> {
    /// Parse card text; whitespace-only input is rejected.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed text is empty.
    pub fn parse(s: impl Into<String>) -> Result<Self, TextError> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(s, PhantomData))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Manual impls so the marker type does not need to implement these traits.

impl<Side> Clone for Text<Side> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<Side> PartialEq for Text<Side> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<Side> Eq for Text<Side> {}

impl<Side> fmt::Debug for Text<Side> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Text").field(&self.0).finish()
    }
}

impl<Side> fmt::Display for Text<Side> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_whitespace_only() {
        assert_eq!(PromptText::parse("   ").unwrap_err(), TextError::Empty);
        assert_eq!(AnswerText::parse("").unwrap_err(), TextError::Empty);
    }

    #[test]
    fn keeps_original_text() {
        let text = PromptText::parse(" What is 7 x 8? ").unwrap();
        assert_eq!(text.as_str(), " What is 7 x 8? ");
        assert_eq!(text.to_string(), " What is 7 x 8? ");
    }
}
