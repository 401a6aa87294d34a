use thiserror::Error;

use crate::model::{
    card::Card,
    ids::{CardId, DeckId},
};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck name cannot be empty")]
    EmptyName,

    #[error("card {0} is already in the deck")]
    DuplicateCard(CardId),

    #[error("card {0} is not in the deck")]
    CardNotFound(CardId),

    #[error("position {position} is out of range for a deck of {len} cards")]
    PositionOutOfRange { position: usize, len: usize },
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// An ordered collection of flashcards.
///
/// Insertion order is presentation order. Card identifiers are unique within a deck.
/// The edit operations here belong to whoever maintains the deck; a running round
/// works on its own copy and never edits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    id: DeckId,
    name: String,
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::EmptyName` if name is empty or whitespace-only.
    pub fn new(id: DeckId, name: impl Into<String>) -> Result<Self, DeckError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DeckError::EmptyName);
        }

        Ok(Self {
            id,
            name: name.trim().to_owned(),
            cards: Vec::new(),
        })
    }

    /// Creates a deck holding `cards` in the given order.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::EmptyName` for a blank name and
    /// `DeckError::DuplicateCard` if two cards share an id.
    pub fn with_cards(
        id: DeckId,
        name: impl Into<String>,
        cards: impl IntoIterator<Item = Card>,
    ) -> Result<Self, DeckError> {
        let mut deck = Self::new(id, name)?;
        for card in cards {
            deck.push_card(card)?;
        }
        Ok(deck)
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> DeckId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn position(&self, card_id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == card_id)
    }

    // Edits

    /// Appends a card to the end of the deck.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::DuplicateCard` if the id is already present.
    pub fn push_card(&mut self, card: Card) -> Result<(), DeckError> {
        if self.position(card.id()).is_some() {
            return Err(DeckError::DuplicateCard(card.id()));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Removes a card, keeping the order of the others.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::CardNotFound` if the id is not in the deck.
    pub fn remove_card(&mut self, card_id: CardId) -> Result<Card, DeckError> {
        let index = self
            .position(card_id)
            .ok_or(DeckError::CardNotFound(card_id))?;
        Ok(self.cards.remove(index))
    }

    /// Moves the card at `from` so that it ends up at `to`.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::PositionOutOfRange` if either position is outside the deck.
    pub fn move_card(&mut self, from: usize, to: usize) -> Result<(), DeckError> {
        let len = self.cards.len();
        for position in [from, to] {
            if position >= len {
                return Err(DeckError::PositionOutOfRange { position, len });
            }
        }
        let card = self.cards.remove(from);
        self.cards.insert(to, card);
        Ok(())
    }

    /// Swaps the cards at positions `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::PositionOutOfRange` if either position is outside the deck.
    pub fn swap_cards(&mut self, a: usize, b: usize) -> Result<(), DeckError> {
        let len = self.cards.len();
        for position in [a, b] {
            if position >= len {
                return Err(DeckError::PositionOutOfRange { position, len });
            }
        }
        self.cards.swap(a, b);
        Ok(())
    }

    /// Consumes the deck and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
