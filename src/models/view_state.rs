//! Cursor over the deck: which card is shown and which side faces up.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub current_index: usize,
    pub showing_question: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_index: 0,
            showing_question: true,
        }
    }
}

impl ViewState {
    /// Shows the question side of the card at `index`.
    pub fn at(index: usize) -> Self {
        Self {
            current_index: index,
            showing_question: true,
        }
    }
}
