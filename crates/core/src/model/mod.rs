mod card;
mod deck;
mod ids;
mod round_settings;
pub mod text;

pub use card::{Card, CardDraft, CardValidationError};
pub use deck::{Deck, DeckError};
pub use ids::{CardId, DeckId, ParseIdError};
pub use round_settings::{RoundSettings, RoundSettingsDraft, RoundSettingsError};
pub use text::{AnswerText, PromptText, Text, TextError};
