//! Shared error types for the services crate.

use thiserror::Error;

use flash_core::model::{CardValidationError, DeckError, RoundSettingsError};
use flash_core::RoundError;

/// Errors emitted by `RoundLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RoundServiceError {
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error(transparent)]
    Settings(#[from] RoundSettingsError),
}

/// Errors emitted while reading a deck document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckFileError {
    #[error("cannot read deck file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed deck document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("card #{position} is invalid: {source}")]
    Card {
        position: usize,
        #[source]
        source: CardValidationError,
    },
    #[error(transparent)]
    Deck(#[from] DeckError),
}
