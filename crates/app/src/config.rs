use std::path::PathBuf;

use clap::Parser;
use flash_core::model::{
    CardDraft, CardId, Deck, DeckId, RoundSettings, RoundSettingsDraft, RoundSettingsError,
};
use flash_core::time::DEFAULT_ROUND_SECS;
use services::deck_file::{load_deck, shuffled};

#[derive(Parser, Debug)]
#[command(name = "flash")]
#[command(version, about = "Timed flashcard rounds in the terminal", long_about = None)]
pub struct Args {
    /// JSON deck file; a small sample deck is used when omitted
    #[arg(short, long, value_name = "FILE", env = "FLASH_DECK")]
    pub deck: Option<PathBuf>,
    /// Round length in seconds
    #[arg(short = 't', long, value_name = "SECS", env = "FLASH_DURATION", default_value_t = DEFAULT_ROUND_SECS)]
    pub duration: i64,
    /// Start with the clock stopped
    #[arg(long)]
    pub start_paused: bool,
    /// Shuffle the deck before the round starts
    #[arg(long)]
    pub shuffle: bool,
    /// Interval between clock ticks in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 1000, value_parser = clap::value_parser!(u64).range(10..))]
    pub tick_ms: u64,
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// # Errors
    ///
    /// Returns `RoundSettingsError` if the duration is not positive.
    pub fn round_settings(&self) -> Result<RoundSettings, RoundSettingsError> {
        RoundSettingsDraft {
            duration_secs: self.duration,
            start_paused: self.start_paused,
        }
        .validate()
    }

    #[must_use]
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_ms)
    }

    /// Load the configured deck, or the sample deck, shuffled if asked to.
    ///
    /// # Errors
    ///
    /// Returns the deck file error when the file cannot be read or parsed.
    pub fn load_deck(&self) -> Result<Deck, Box<dyn std::error::Error>> {
        let deck = match &self.deck {
            Some(path) => load_deck(path)?,
            None => sample_deck()?,
        };
        if self.shuffle {
            return Ok(shuffled(deck, &mut rand::rng())?);
        }
        Ok(deck)
    }
}

/// Deck used when no file is given.
///
/// # Errors
///
/// Never fails in practice; the card texts are fixed.
pub fn sample_deck() -> Result<Deck, flash_core::Error> {
    let pairs = [
        ("What is the capital of Peru?", "Lima"),
        ("7 x 8", "56"),
        ("Chemical symbol for gold", "Au"),
    ];
    let mut deck = Deck::new(DeckId::new(1), "Sample")?;
    for (id, (prompt, answer)) in (1..).zip(pairs) {
        deck.push_card(CardDraft::new(prompt, answer).validate(CardId::new(id))?)?;
    }
    Ok(deck)
}
