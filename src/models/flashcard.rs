//! Flashcard is a pair <question, answer>. Only text is used on both sides
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Empty or whitespace-only text. The text itself is never trimmed.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}
