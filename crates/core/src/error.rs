use thiserror::Error;

use crate::model::{CardValidationError, DeckError, ParseIdError, RoundSettingsError, TextError};
use crate::round::RoundError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Card(#[from] CardValidationError),
    #[error(transparent)]
    Text(#[from] TextError),
    #[error(transparent)]
    Settings(#[from] RoundSettingsError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}
