//! Deck is an ordered list of flashcards. Insertion order is display order.
use super::Flashcard;
use serde::{Deserialize, Serialize};

pub const DEFAULT_QUESTION: &str = "What is 2+2?";
pub const DEFAULT_ANSWER: &str = "4";

/// Serialized as a bare JSON array of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    pub flashcards: Vec<Flashcard>,
}

impl Deck {
    pub fn new(flashcards: Vec<Flashcard>) -> Self {
        Self { flashcards }
    }

    /// The single-card deck used when nothing usable is stored.
    pub fn seeded() -> Self {
        Self::new(vec![Flashcard::new(DEFAULT_QUESTION, DEFAULT_ANSWER)])
    }

    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Flashcard> {
        self.flashcards.get(index)
    }

    pub fn push(&mut self, card: Flashcard) {
        self.flashcards.push(card);
    }
}
