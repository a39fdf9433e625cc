pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod persistence;

pub use error::{FlashcardError, Result};
pub use models::{Deck, DeckSession, Flashcard, ViewState};
