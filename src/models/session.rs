//! Viewing session over a persisted deck.
//! Owns the deck and the cursor, and writes the deck back after every change.

use super::{Deck, Flashcard, ViewState, flashcard::is_blank};
use crate::database::KeyValueStore;
use crate::error::Result;
use crate::persistence::DeckStore;

pub struct DeckSession<S> {
    deck: Deck,
    view: ViewState,
    deck_store: DeckStore<S>,
}

impl<S: KeyValueStore> DeckSession<S> {
    /// Loads the deck from `store`.
    ///
    /// If nothing usable is stored, the deck starts as the single default card
    /// and is written back right away so the store never holds an empty deck.
    pub fn open(store: S) -> Result<Self> {
        let mut deck_store = DeckStore::new(store);
        let mut deck = deck_store.load()?;

        if deck.is_empty() {
            log::info!("No flashcards stored, starting with the default card");
            deck = Deck::seeded();
            deck_store.save(&deck)?;
        }

        log::info!("Loaded {} flashcards", deck.len());
        Ok(Self {
            deck,
            view: ViewState::default(),
            deck_store,
        })
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    #[cfg(test)]
    pub fn deck_store(&self) -> &DeckStore<S> {
        &self.deck_store
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        self.deck.get(self.view.current_index)
    }

    /// Text of the side currently facing up.
    pub fn face_text(&self) -> Option<&str> {
        self.current_card().map(|card| {
            if self.view.showing_question {
                card.question.as_str()
            } else {
                card.answer.as_str()
            }
        })
    }

    pub fn has_previous(&self) -> bool {
        self.view.current_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.view.current_index + 1 < self.deck.len()
    }

    /// "n / total", 1-based.
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.view.current_index + 1, self.deck.len())
    }

    pub fn flip(&mut self) {
        self.view.showing_question = !self.view.showing_question;
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.view = ViewState::at(self.view.current_index + 1);
        }
    }

    pub fn previous(&mut self) {
        if self.has_previous() {
            self.view = ViewState::at(self.view.current_index - 1);
        }
    }

    /// Appends a card and moves to it, question side up.
    ///
    /// Returns `Ok(false)` without touching anything when either text is blank.
    /// The in-memory deck is updated before the save, so a save error leaves
    /// the new card visible but not yet persisted.
    pub fn add_card(&mut self, question: &str, answer: &str) -> Result<bool> {
        if is_blank(question) || is_blank(answer) {
            log::debug!("Ignoring flashcard with a blank side");
            return Ok(false);
        }

        self.deck.push(Flashcard::new(question, answer));
        self.view = ViewState::at(self.deck.len() - 1);
        log::info!("Added flashcard #{}", self.deck.len());

        self.deck_store.save(&self.deck)?;
        Ok(true)
    }
}
