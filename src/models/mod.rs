pub mod deck;
pub mod flashcard;
pub mod session;
pub mod view_state;

pub use deck::Deck;
pub use flashcard::Flashcard;
pub use session::DeckSession;
pub use view_state::ViewState;
