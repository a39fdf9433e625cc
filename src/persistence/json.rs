//! JSON persistence for the deck.
//! The whole deck is written as one JSON array into a single key-value slot.

use crate::database::KeyValueStore;
use crate::error::Result;
use crate::models::Deck;

/// Namespace of the slot holding the deck
pub const NAMESPACE: &str = "FlashcardApp";
/// Key of the slot holding the deck
pub const DECK_KEY: &str = "flashcards";

pub struct DeckStore<S> {
    store: S,
}

impl<S: KeyValueStore> DeckStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Writes the full deck, replacing the previous one.
    pub fn save(&mut self, deck: &Deck) -> Result<()> {
        let json_string = serde_json::to_string(deck)?;
        self.store.put(NAMESPACE, DECK_KEY, &json_string)?;
        log::debug!("Saved {} cards", deck.len());
        Ok(())
    }

    /// Reads the stored deck.
    ///
    /// A slot that was never written, holds `null` or does not decode yields an
    /// empty deck. Only failures of the store itself are returned as errors.
    pub fn load(&self) -> Result<Deck> {
        let Some(contents) = self.store.get(NAMESPACE, DECK_KEY)? else {
            log::debug!("No stored deck");
            return Ok(Deck::default());
        };

        match serde_json::from_str::<Option<Deck>>(&contents) {
            Ok(deck) => {
                let deck = deck.unwrap_or_default();
                log::debug!("Loaded {} cards", deck.len());
                Ok(deck)
            }
            Err(e) => {
                log::warn!("Stored deck could not be decoded, ignoring it: {e}");
                Ok(Deck::default())
            }
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}
