pub mod json;

pub use json::{DECK_KEY, DeckStore, NAMESPACE};
