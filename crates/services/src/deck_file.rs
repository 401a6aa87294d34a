//! JSON deck documents.
//!
//! ```json
//! { "id": 1, "name": "Capitals", "cards": [{ "prompt": "France", "answer": "Paris" }] }
//! ```
//!
//! Cards without an `id` get the lowest unused ids, starting at 1.

use std::collections::BTreeSet;
use std::path::Path;

use log::debug;
use rand::Rng;
use serde::Deserialize;

use flash_core::model::{CardDraft, CardId, Deck, DeckError, DeckId};

use crate::error::DeckFileError;

#[derive(Debug, Deserialize)]
struct DeckDocument {
    id: u64,
    name: String,
    #[serde(default)]
    cards: Vec<CardDocument>,
}

#[derive(Debug, Deserialize)]
struct CardDocument {
    #[serde(default)]
    id: Option<u64>,
    prompt: String,
    answer: String,
}

/// Parse a deck from a JSON document.
///
/// # Errors
///
/// Returns `DeckFileError::Json` for malformed input, `DeckFileError::Card` for
/// cards with empty text and `DeckFileError::Deck` for duplicate ids or a blank name.
pub fn parse_deck(raw: &str) -> Result<Deck, DeckFileError> {
    let document: DeckDocument = serde_json::from_str(raw)?;

    let mut taken: BTreeSet<u64> = document.cards.iter().filter_map(|card| card.id).collect();
    let mut next_free = 1_u64;

    let mut deck = Deck::new(DeckId::new(document.id), document.name)?;
    for (position, card) in document.cards.into_iter().enumerate() {
        let id = match card.id {
            Some(id) => id,
            None => {
                while taken.contains(&next_free) {
                    next_free += 1;
                }
                taken.insert(next_free);
                next_free
            }
        };
        let card = CardDraft::new(card.prompt, card.answer)
            .validate(CardId::new(id))
            .map_err(|source| DeckFileError::Card { position, source })?;
        deck.push_card(card)?;
    }

    debug!("parsed deck {} with {} cards", deck.id(), deck.len());
    Ok(deck)
}

/// Read and parse a deck file.
///
/// # Errors
///
/// Returns `DeckFileError::Io` if the file cannot be read, otherwise as `parse_deck`.
pub fn load_deck(path: impl AsRef<Path>) -> Result<Deck, DeckFileError> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    parse_deck(&raw)
}

/// Returns the deck with its cards in random order.
///
/// # Errors
///
/// Returns `DeckError` only if the deck's own positions are inconsistent.
pub fn shuffled<R: Rng>(mut deck: Deck, rng: &mut R) -> Result<Deck, DeckError> {
    for i in (1..deck.len()).rev() {
        let j = rng.random_range(0..=i);
        deck.swap_cards(i, j)?;
    }
    Ok(deck)
}
